//! Field-level validators keyed by semantic field kind.
//!
//! Each [`FieldKind`] validator inspects exactly one JSON value and never
//! sees its siblings. [`check_inscription_for_type`] is the one pair check;
//! the schema walker hands it the sibling type code of the same record.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;
use serde_json::Value;

use crate::esocial::domain::{ErrorCode, EventType, FieldPath, ValidationError};
use crate::esocial::ports::validator::ValidationConfig;
use crate::identifier::{IdentifierError, IdentifierKind, checksum};

/// Codes of the 27 Brazilian federative units.
pub const STATE_CODES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

#[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field pattern must compile")
}

static DATE_BR: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{2}/\d{2}/\d{4}$"));
static DATE_ISO: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{4}-\d{2}-\d{2}$"));
static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{4}-(?:0[1-9]|1[0-2])$"));
static TIME: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:[01]\d|2[0-3]):[0-5]\d$"));
static POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{5}-\d{3}$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\(?[1-9]{2}\)? ?(?:[2-8]|9[1-9])[0-9]{3}-?[0-9]{4}$")
});
static CID: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z][0-9]{2}(?:\.?[0-9])?$"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| compile(r"^-?\d+$"));
static AMOUNT_PLAIN: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+(?:\.\d{1,2})?$"));
static AMOUNT_BR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\d{1,3}(?:\.\d{3})+|\d+),\d{1,2}$"));
static INSCRIPTION: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9./-]+$"));

/// Semantic type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text whose character count lies in `min..=max`.
    Text {
        /// Minimum character count.
        min: usize,
        /// Maximum character count.
        max: usize,
    },
    /// Text of exactly the given character count.
    FixedLength(usize),
    /// Exactly the given number of ASCII digits.
    Digits(usize),
    /// Calendar date as `DD/MM/YYYY`, `YYYY-MM-DD` or an RFC 3339 timestamp.
    Date,
    /// Reference month as `YYYY-MM`.
    YearMonth,
    /// Time of day as 24-hour `HH:mm`.
    Time,
    /// Brazilian postal code `00000-000`.
    PostalCode,
    /// Brazilian landline or mobile number with area code.
    Phone,
    /// Federative unit code such as `SP`.
    StateCode,
    /// ICD-10 diagnosis code such as `M54.5`.
    Cid,
    /// Canonical event code such as `S-2230`.
    EventCode,
    /// One of a closed list of codes; integers are compared by their text.
    Code(&'static [&'static str]),
    /// Integer (number or digit string) within `min..=max`.
    Integer {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Non-negative monetary amount with at most two decimal places.
    Currency {
        /// Largest accepted amount in cents, if bounded.
        max_cents: Option<u64>,
    },
    /// JSON boolean.
    Boolean,
    /// Checksum-valid individual taxpayer ID (CPF).
    IndividualId,
    /// Checksum-valid legal-entity taxpayer ID (CNPJ).
    LegalEntityId,
    /// Checksum-valid worker registration ID (PIS/NIS).
    WorkerRegistrationId,
    /// Employer inscription of 8 to 14 digits; its checksum depends on the
    /// sibling inscription type.
    InscriptionNumber,
}

/// A field validator rejection, not yet attributed to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    code: ErrorCode,
    message: String,
}

impl FieldFailure {
    fn format(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::FormatError,
            message: message.into(),
        }
    }

    fn range(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::RangeError,
            message: message.into(),
        }
    }

    fn cross_field(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::CrossFieldError,
            message: message.into(),
        }
    }

    fn from_identifier(error: IdentifierError) -> Self {
        let code = if error.is_checksum_failure() {
            ErrorCode::ChecksumError
        } else {
            ErrorCode::FormatError
        };
        Self {
            code,
            message: error.to_string(),
        }
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attributes the failure to `path`.
    #[must_use]
    pub fn at(self, path: FieldPath) -> ValidationError {
        ValidationError::new(path, self.code, self.message)
    }
}

/// Checks one value against its field kind.
///
/// # Errors
///
/// Returns a [`FieldFailure`] carrying `FormatError`, `RangeError` or
/// `ChecksumError` when the value is rejected.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::ErrorCode;
/// use esocial_guard::esocial::ports::ValidationConfig;
/// use esocial_guard::esocial::validation::fields::{FieldKind, check_field};
/// use serde_json::json;
///
/// let config = ValidationConfig::default();
/// assert!(check_field(FieldKind::PostalCode, &json!("01310-100"), &config).is_ok());
///
/// let failure = check_field(FieldKind::IndividualId, &json!("123.456.789-00"), &config)
///     .expect_err("bad check digit");
/// assert_eq!(failure.code(), ErrorCode::ChecksumError);
/// ```
pub fn check_field(
    kind: FieldKind,
    value: &Value,
    config: &ValidationConfig,
) -> Result<(), FieldFailure> {
    match kind {
        FieldKind::Text { min, max } => check_text(value, min, max),
        FieldKind::FixedLength(length) => check_text(value, length, length),
        FieldKind::Digits(count) => check_digits(value, count),
        FieldKind::Date => check_date(value, config),
        FieldKind::YearMonth => check_year_month(value, config),
        FieldKind::Time => check_pattern(value, &TIME, "time must be formatted as HH:mm"),
        FieldKind::PostalCode => {
            check_pattern(value, &POSTAL_CODE, "postal code must be formatted as 00000-000")
        }
        FieldKind::Phone => check_phone(value),
        FieldKind::StateCode => check_state_code(value),
        FieldKind::Cid => check_pattern(value, &CID, "diagnosis code must be an ICD-10 code"),
        FieldKind::EventCode => check_event_code(value),
        FieldKind::Code(allowed) => check_code(value, allowed),
        FieldKind::Integer { min, max } => check_integer(value, min, max),
        FieldKind::Currency { max_cents } => check_currency(value, max_cents),
        FieldKind::Boolean => value
            .is_boolean()
            .then_some(())
            .ok_or_else(|| FieldFailure::format("expected a boolean")),
        FieldKind::IndividualId => check_identifier(value, IdentifierKind::IndividualId),
        FieldKind::LegalEntityId => check_identifier(value, IdentifierKind::LegalEntityId),
        FieldKind::WorkerRegistrationId => {
            check_identifier(value, IdentifierKind::WorkerRegistrationId)
        }
        FieldKind::InscriptionNumber => check_inscription(value),
    }
}

/// Parses a calendar date in any of the accepted date formats.
///
/// RFC 3339 timestamps resolve to their UTC calendar day.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if DATE_ISO.is_match(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }
    if DATE_BR.is_match(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok();
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
}

/// Parses a `YYYY-MM` reference month as its first day.
#[must_use]
pub fn parse_year_month(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if !YEAR_MONTH.is_match(trimmed) {
        return None;
    }
    let (year, month) = trimmed.split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Resolves a JSON value holding either a date or a reference month.
#[must_use]
pub fn parse_temporal(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    parse_date(text).or_else(|| parse_year_month(text))
}

/// Returns the textual form of a code-like value.
///
/// Strings are trimmed; integers are rendered in decimal.
#[must_use]
pub fn code_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.trim())),
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            Some(Cow::Owned(number.to_string()))
        }
        _ => None,
    }
}

fn expect_str(value: &Value) -> Result<&str, FieldFailure> {
    value
        .as_str()
        .ok_or_else(|| FieldFailure::format("expected a string"))
}

fn check_text(value: &Value, min: usize, max: usize) -> Result<(), FieldFailure> {
    let length = expect_str(value)?.chars().count();
    if length < min || length > max {
        let bounds = if min == max {
            format!("exactly {min}")
        } else {
            format!("between {min} and {max}")
        };
        return Err(FieldFailure::range(format!(
            "length must be {bounds} characters, got {length}"
        )));
    }
    Ok(())
}

fn check_digits(value: &Value, count: usize) -> Result<(), FieldFailure> {
    let text = code_text(value).ok_or_else(|| FieldFailure::format("expected digits"))?;
    if text.len() != count || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FieldFailure::format(format!("expected exactly {count} digits")));
    }
    Ok(())
}

fn check_pattern(value: &Value, pattern: &Regex, message: &str) -> Result<(), FieldFailure> {
    if pattern.is_match(expect_str(value)?.trim()) {
        Ok(())
    } else {
        Err(FieldFailure::format(message))
    }
}

fn check_year(date: NaiveDate, config: &ValidationConfig) -> Result<(), FieldFailure> {
    if config.accepts_year(date.year()) {
        Ok(())
    } else {
        Err(FieldFailure::range(format!(
            "year {} is outside {}..={}",
            date.year(),
            config.min_year,
            config.max_year
        )))
    }
}

fn check_date(value: &Value, config: &ValidationConfig) -> Result<(), FieldFailure> {
    let date = parse_date(expect_str(value)?).ok_or_else(|| {
        FieldFailure::format("date must be a real calendar day as DD/MM/YYYY or YYYY-MM-DD")
    })?;
    check_year(date, config)
}

fn check_year_month(value: &Value, config: &ValidationConfig) -> Result<(), FieldFailure> {
    let month = parse_year_month(expect_str(value)?)
        .ok_or_else(|| FieldFailure::format("reference month must be formatted as YYYY-MM"))?;
    check_year(month, config)
}

fn check_phone(value: &Value) -> Result<(), FieldFailure> {
    let text = expect_str(value)?.trim();
    let digits = text.bytes().filter(u8::is_ascii_digit).count();
    if PHONE.is_match(text) && (digits == 10 || digits == 11) {
        Ok(())
    } else {
        Err(FieldFailure::format(
            "phone must carry an area code and 8 or 9 digits",
        ))
    }
}

fn check_state_code(value: &Value) -> Result<(), FieldFailure> {
    let text = expect_str(value)?.trim();
    if STATE_CODES.contains(&text) {
        Ok(())
    } else {
        Err(FieldFailure::format(format!("'{text}' is not a federative unit code")))
    }
}

fn check_event_code(value: &Value) -> Result<(), FieldFailure> {
    let text = expect_str(value)?.trim();
    match EventType::try_from(text) {
        Ok(event_type) if event_type.code() == text => Ok(()),
        Ok(event_type) => Err(FieldFailure::format(format!(
            "event code must be written as '{event_type}'"
        ))),
        Err(_) => Err(FieldFailure::format(format!("'{text}' is not a known event code"))),
    }
}

fn check_code(value: &Value, allowed: &[&str]) -> Result<(), FieldFailure> {
    let text = code_text(value).ok_or_else(|| FieldFailure::format("expected a code"))?;
    if allowed.contains(&&*text) {
        Ok(())
    } else {
        Err(FieldFailure::format(format!(
            "'{text}' is not one of {}",
            allowed.join(", ")
        )))
    }
}

fn check_integer(value: &Value, min: i64, max: i64) -> Result<(), FieldFailure> {
    let parsed = match value {
        Value::Number(number) => match number.as_i64() {
            Some(integer) => integer,
            None if number.is_u64() => {
                return Err(FieldFailure::range(format!("must not exceed {max}")));
            }
            None => return Err(FieldFailure::format("expected an integer")),
        },
        Value::String(text) if INTEGER.is_match(text.trim()) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| FieldFailure::range(format!("must lie between {min} and {max}")))?,
        _ => return Err(FieldFailure::format("expected an integer")),
    };
    if parsed < min || parsed > max {
        return Err(FieldFailure::range(format!(
            "{parsed} must lie between {min} and {max}"
        )));
    }
    Ok(())
}

fn check_currency(value: &Value, max_cents: Option<u64>) -> Result<(), FieldFailure> {
    let text: Cow<'_, str> = match value {
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::String(text) => Cow::Borrowed(text.trim()),
        _ => return Err(FieldFailure::format("expected a monetary amount")),
    };
    if text.starts_with('-') {
        return Err(FieldFailure::range("amount must not be negative"));
    }
    let cents = parse_cents(&text).ok_or_else(|| {
        FieldFailure::format("amount must be a number with at most two decimal places")
    })?;
    match max_cents {
        Some(limit) if cents > limit => Err(FieldFailure::range(format!(
            "amount must not exceed {}.{:02}",
            limit.div_euclid(100),
            limit.rem_euclid(100)
        ))),
        _ => Ok(()),
    }
}

/// Parses `1234.56` or `1.234,56` into cents.
fn parse_cents(text: &str) -> Option<u64> {
    let normalized = if AMOUNT_PLAIN.is_match(text) {
        text.to_owned()
    } else if AMOUNT_BR.is_match(text) {
        text.replace('.', "").replace(',', ".")
    } else {
        return None;
    };
    let (units, fraction) = normalized
        .split_once('.')
        .unwrap_or((normalized.as_str(), ""));
    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()?.checked_mul(10)?,
        _ => fraction.parse::<u64>().ok()?,
    };
    units
        .parse::<u64>()
        .ok()?
        .checked_mul(100)?
        .checked_add(fraction_cents)
}

fn check_identifier(value: &Value, kind: IdentifierKind) -> Result<(), FieldFailure> {
    let text = expect_str(value)?;
    checksum::check_kind(text, kind).map_err(FieldFailure::from_identifier)
}

fn check_inscription(value: &Value) -> Result<(), FieldFailure> {
    let text = code_text(value).ok_or_else(|| FieldFailure::format("expected an inscription"))?;
    let digits = text.bytes().filter(u8::is_ascii_digit).count();
    if INSCRIPTION.is_match(&text) && (8..=14).contains(&digits) {
        Ok(())
    } else {
        Err(FieldFailure::format(
            "inscription must hold between 8 and 14 digits",
        ))
    }
}

/// Checks an inscription number against the inscription type code held by
/// the same record.
///
/// Type `1` requires a CNPJ, `2` a CPF, and `3` or `4` at least 8 digits.
/// Unknown type codes and non-textual numbers are left to the fields' own
/// validators.
///
/// # Errors
///
/// Returns `ChecksumError` for a wrong check digit and `CrossFieldError`
/// when the digit count does not suit the type.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::ErrorCode;
/// use esocial_guard::esocial::validation::fields::check_inscription_for_type;
/// use serde_json::json;
///
/// assert!(check_inscription_for_type("1", &json!("11.222.333/0001-81")).is_ok());
/// let failure = check_inscription_for_type("1", &json!("11222333000182"))
///     .expect_err("wrong check digit");
/// assert_eq!(failure.code(), ErrorCode::ChecksumError);
/// ```
pub fn check_inscription_for_type(kind_code: &str, number: &Value) -> Result<(), FieldFailure> {
    let Some(raw) = code_text(number) else {
        return Ok(());
    };

    let outcome = match kind_code {
        "1" => checksum::check_legal_entity_id(&raw),
        "2" => checksum::check_individual_id(&raw),
        "3" | "4" => {
            let digits = checksum::normalize(&raw).len();
            return if digits < 8 {
                Err(FieldFailure::cross_field(format!(
                    "inscription type {kind_code} requires at least 8 digits, got {digits}"
                )))
            } else {
                Ok(())
            };
        }
        _ => return Ok(()),
    };

    outcome.map_err(|error| {
        if error.is_checksum_failure() {
            FieldFailure::from_identifier(error)
        } else {
            FieldFailure::cross_field(format!(
                "inscription type {kind_code} requires a {}: {error}",
                error.kind().acronym()
            ))
        }
    })
}
