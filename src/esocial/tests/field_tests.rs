//! Unit tests for field-level validators.

use crate::esocial::{
    domain::{ErrorCode, FieldPath},
    ports::validator::ValidationConfig,
    validation::fields::{
        FieldKind, check_field, check_inscription_for_type, parse_date, parse_temporal,
        parse_year_month,
    },
};
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TWO_CODES: FieldKind = FieldKind::Code(&["1", "2"]);
const CATEGORY: FieldKind = FieldKind::Integer { min: 101, max: 905 };
const AMOUNT: FieldKind = FieldKind::Currency { max_cents: None };
const CAPPED_AMOUNT: FieldKind = FieldKind::Currency {
    max_cents: Some(99_999_999),
};

#[fixture]
fn config() -> ValidationConfig {
    ValidationConfig::default()
}

#[rstest]
#[case(FieldKind::Text { min: 1, max: 5 }, json!("abc"))]
#[case(FieldKind::Text { min: 1, max: 5 }, json!("ação!"))]
#[case(FieldKind::FixedLength(2), json!("07"))]
#[case(FieldKind::Digits(7), json!("3550308"))]
#[case(FieldKind::Digits(7), json!(3_550_308))]
#[case(FieldKind::Date, json!("15/06/2024"))]
#[case(FieldKind::Date, json!("2024-06-15"))]
#[case(FieldKind::Date, json!("2024-06-15T10:30:00-03:00"))]
#[case(FieldKind::Date, json!("29/02/2024"))]
#[case(FieldKind::YearMonth, json!("2024-05"))]
#[case(FieldKind::Time, json!("23:59"))]
#[case(FieldKind::Time, json!("00:00"))]
#[case(FieldKind::PostalCode, json!("01310-100"))]
#[case(FieldKind::Phone, json!("(11) 98765-4321"))]
#[case(FieldKind::Phone, json!("1134567890"))]
#[case(FieldKind::StateCode, json!("SP"))]
#[case(FieldKind::StateCode, json!("DF"))]
#[case(FieldKind::Cid, json!("M54.5"))]
#[case(FieldKind::Cid, json!("A00"))]
#[case(FieldKind::Cid, json!("A000"))]
#[case(FieldKind::EventCode, json!("S-2230"))]
#[case(TWO_CODES, json!("2"))]
#[case(TWO_CODES, json!(2))]
#[case(CATEGORY, json!(301))]
#[case(CATEGORY, json!("101"))]
#[case(CATEGORY, json!(905))]
#[case(AMOUNT, json!(1234.56))]
#[case(AMOUNT, json!(0))]
#[case(AMOUNT, json!("1.234,56"))]
#[case(AMOUNT, json!("1234,5"))]
#[case(AMOUNT, json!("1234.56"))]
#[case(CAPPED_AMOUNT, json!(999_999.99))]
#[case(FieldKind::Boolean, json!(false))]
#[case(FieldKind::IndividualId, json!("111.444.777-35"))]
#[case(FieldKind::IndividualId, json!("52998224725"))]
#[case(FieldKind::LegalEntityId, json!("11.222.333/0001-81"))]
#[case(FieldKind::WorkerRegistrationId, json!("120.56144.87-7"))]
#[case(FieldKind::InscriptionNumber, json!("12345678"))]
#[case(FieldKind::InscriptionNumber, json!("11.222.333/0001-81"))]
fn accepts_valid_values(config: ValidationConfig, #[case] kind: FieldKind, #[case] value: Value) {
    let outcome = check_field(kind, &value, &config);
    assert!(outcome.is_ok(), "{kind:?} rejected {value}: {outcome:?}");
}

#[rstest]
#[case(FieldKind::Text { min: 1, max: 5 }, json!("abcdef"), ErrorCode::RangeError)]
#[case(FieldKind::Text { min: 1, max: 5 }, json!(42), ErrorCode::FormatError)]
#[case(FieldKind::FixedLength(2), json!("7"), ErrorCode::RangeError)]
#[case(FieldKind::Digits(7), json!("355030"), ErrorCode::FormatError)]
#[case(FieldKind::Digits(7), json!("355030A"), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!("31/02/2024"), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!("2024-13-01"), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!("29/02/2023"), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!("15-06-2024"), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!(20_240_615), ErrorCode::FormatError)]
#[case(FieldKind::Date, json!("31/12/1899"), ErrorCode::RangeError)]
#[case(FieldKind::Date, json!("2101-01-01"), ErrorCode::RangeError)]
#[case(FieldKind::YearMonth, json!("2024-13"), ErrorCode::FormatError)]
#[case(FieldKind::YearMonth, json!("2024-5"), ErrorCode::FormatError)]
#[case(FieldKind::YearMonth, json!("1899-01"), ErrorCode::RangeError)]
#[case(FieldKind::Time, json!("24:00"), ErrorCode::FormatError)]
#[case(FieldKind::Time, json!("9:30"), ErrorCode::FormatError)]
#[case(FieldKind::PostalCode, json!("01310100"), ErrorCode::FormatError)]
#[case(FieldKind::Phone, json!("(11) 91234-567"), ErrorCode::FormatError)]
#[case(FieldKind::Phone, json!("(01) 3456-7890"), ErrorCode::FormatError)]
#[case(FieldKind::StateCode, json!("XX"), ErrorCode::FormatError)]
#[case(FieldKind::StateCode, json!("sp"), ErrorCode::FormatError)]
#[case(FieldKind::Cid, json!("m54"), ErrorCode::FormatError)]
#[case(FieldKind::EventCode, json!("S2230"), ErrorCode::FormatError)]
#[case(FieldKind::EventCode, json!("S-9999"), ErrorCode::FormatError)]
#[case(TWO_CODES, json!("3"), ErrorCode::FormatError)]
#[case(TWO_CODES, json!(true), ErrorCode::FormatError)]
#[case(CATEGORY, json!(100), ErrorCode::RangeError)]
#[case(CATEGORY, json!("906"), ErrorCode::RangeError)]
#[case(CATEGORY, json!(301.5), ErrorCode::FormatError)]
#[case(CATEGORY, json!("3O1"), ErrorCode::FormatError)]
#[case(AMOUNT, json!(-1), ErrorCode::RangeError)]
#[case(AMOUNT, json!("-10,00"), ErrorCode::RangeError)]
#[case(AMOUNT, json!("12.345"), ErrorCode::FormatError)]
#[case(AMOUNT, json!(0.125), ErrorCode::FormatError)]
#[case(AMOUNT, json!("R$ 10,00"), ErrorCode::FormatError)]
#[case(CAPPED_AMOUNT, json!(1_000_000), ErrorCode::RangeError)]
#[case(FieldKind::Boolean, json!("true"), ErrorCode::FormatError)]
#[case(FieldKind::IndividualId, json!("123.456.789-00"), ErrorCode::ChecksumError)]
#[case(FieldKind::IndividualId, json!("111.111.111-11"), ErrorCode::ChecksumError)]
#[case(FieldKind::IndividualId, json!("1234"), ErrorCode::FormatError)]
#[case(FieldKind::IndividualId, json!(11_144_477_735_u64), ErrorCode::FormatError)]
#[case(FieldKind::LegalEntityId, json!("11222333000182"), ErrorCode::ChecksumError)]
#[case(FieldKind::WorkerRegistrationId, json!("12056144870"), ErrorCode::ChecksumError)]
#[case(FieldKind::InscriptionNumber, json!("1234567"), ErrorCode::FormatError)]
#[case(FieldKind::InscriptionNumber, json!("ABC12345678"), ErrorCode::FormatError)]
fn rejects_invalid_values(
    config: ValidationConfig,
    #[case] kind: FieldKind,
    #[case] value: Value,
    #[case] expected: ErrorCode,
) {
    let failure = check_field(kind, &value, &config).expect_err("value should be rejected");
    assert_eq!(failure.code(), expected, "{kind:?} on {value}: {}", failure.message());
}

#[rstest]
#[case(2100, true)]
#[case(2099, true)]
fn year_window_follows_configuration(#[case] year: i32, #[case] default_accepts: bool) {
    let value = json!(format!("{year}-01-01"));
    let default_outcome = check_field(FieldKind::Date, &value, &ValidationConfig::default());
    assert_eq!(default_outcome.is_ok(), default_accepts);

    let strict_outcome = check_field(FieldKind::Date, &value, &ValidationConfig::strict());
    assert_eq!(strict_outcome.is_ok(), year <= 2099);
}

#[test]
fn custom_year_window_narrows_dates() {
    let config = ValidationConfig::default().with_year_window(2000, 2030);
    let failure = check_field(FieldKind::Date, &json!("1999-12-31"), &config)
        .expect_err("year before window");
    assert_eq!(failure.code(), ErrorCode::RangeError);
}

#[test]
fn failure_attaches_to_path() {
    let failure = check_field(FieldKind::PostalCode, &json!("abc"), &ValidationConfig::default())
        .expect_err("malformed postal code");
    let error = failure.at(FieldPath::parse("localCondicao.cep"));
    assert_eq!(error.code(), ErrorCode::FormatError);
    assert_eq!(error.path().to_string(), "localCondicao.cep");
}

#[rstest]
#[case("15/06/2024", NaiveDate::from_ymd_opt(2024, 6, 15))]
#[case("2024-06-15", NaiveDate::from_ymd_opt(2024, 6, 15))]
#[case("2024-06-15T23:30:00-03:00", NaiveDate::from_ymd_opt(2024, 6, 16))]
#[case("2024-06-31", None)]
#[case("tomorrow", None)]
fn parse_date_resolves_calendar_days(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
    assert_eq!(parse_date(raw), expected);
}

#[test]
fn year_month_resolves_to_first_day() {
    assert_eq!(parse_year_month("2024-05"), NaiveDate::from_ymd_opt(2024, 5, 1));
    assert_eq!(parse_temporal(&json!("2024-05")), NaiveDate::from_ymd_opt(2024, 5, 1));
    assert_eq!(parse_temporal(&json!("2024-05-20")), NaiveDate::from_ymd_opt(2024, 5, 20));
    assert_eq!(parse_temporal(&json!(202_405)), None);
}

#[rstest]
#[case::valid_cnpj("1", json!("11.222.333/0001-81"), None)]
#[case::cnpj_checksum("1", json!("11222333000182"), Some(ErrorCode::ChecksumError))]
#[case::cpf_given_for_cnpj("1", json!("111.444.777-35"), Some(ErrorCode::CrossFieldError))]
#[case::valid_cpf("2", json!("11144477735"), None)]
#[case::cpf_checksum("2", json!("123.456.789-00"), Some(ErrorCode::ChecksumError))]
#[case::cnpj_given_for_cpf("2", json!("11222333000181"), Some(ErrorCode::CrossFieldError))]
#[case::numeric_cpf("2", json!(11_144_477_735_u64), None)]
#[case::caepf("3", json!("12345678"), None)]
#[case::short_cno("4", json!("1234567"), Some(ErrorCode::CrossFieldError))]
#[case::unknown_type("9", json!("1"), None)]
fn inscription_number_matches_its_type(
    #[case] kind_code: &str,
    #[case] number: Value,
    #[case] expected: Option<ErrorCode>,
) {
    let outcome = check_inscription_for_type(kind_code, &number);
    assert_eq!(outcome.err().map(|failure| failure.code()), expected);
}
