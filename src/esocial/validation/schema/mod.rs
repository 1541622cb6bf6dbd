//! Declarative record schemas for every event type.
//!
//! Schemas are immutable statics composed from shared blocks. Structural
//! validation walks a payload against its schema and collects every
//! violation with the path of the offending value. Record checks that read
//! two fields of the same record run here too, so their failures are
//! collected alongside every other structural error.

mod employer;
mod health;
mod shared;
mod totalizers;
mod worker;

use serde_json::{Map, Value};

use super::fields::{FieldKind, check_field, check_inscription_for_type, code_text};
use crate::esocial::domain::{ErrorCode, EventType, FieldPath, ValidationError};
use crate::esocial::ports::validator::ValidationConfig;

/// Whether a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence yields `RequiredFieldMissing`.
    Required,
    /// Absence is tolerated; present values are still validated.
    Optional,
}

/// Shape of the value stored under a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// A scalar checked by a field validator.
    Scalar(FieldKind),
    /// A nested record.
    Record(&'static RecordSchema),
    /// An array of records.
    List {
        /// Schema every element must satisfy.
        item: &'static RecordSchema,
        /// Minimum element count.
        min: usize,
        /// Maximum element count; unbounded lists fall back to
        /// [`ValidationConfig::max_collection_items`].
        max: Option<usize>,
    },
}

/// One named field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key of the field in the enclosing JSON object.
    pub name: &'static str,
    /// Whether the field must be supplied.
    pub presence: Presence,
    /// Shape of the stored value.
    pub shape: FieldShape,
}

impl FieldSpec {
    /// Declares a required scalar field.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            presence: Presence::Required,
            shape: FieldShape::Scalar(kind),
        }
    }

    /// Declares an optional scalar field.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            shape: FieldShape::Scalar(kind),
        }
    }

    /// Declares a nested record.
    #[must_use]
    pub const fn record(
        name: &'static str,
        presence: Presence,
        schema: &'static RecordSchema,
    ) -> Self {
        Self {
            name,
            presence,
            shape: FieldShape::Record(schema),
        }
    }

    /// Declares an array of records.
    #[must_use]
    pub const fn list(
        name: &'static str,
        presence: Presence,
        item: &'static RecordSchema,
        min: usize,
        max: Option<usize>,
    ) -> Self {
        Self {
            name,
            presence,
            shape: FieldShape::List { item, min, max },
        }
    }
}

/// A check over two fields of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCheck {
    /// `number` must be a valid inscription for the type code in `kind`.
    InscriptionMatchesType {
        /// Field holding the inscription type code.
        kind: &'static str,
        /// Field holding the inscription number; failures are reported here.
        number: &'static str,
    },
}

impl RecordCheck {
    /// The `tpInsc` / `nrInsc` pair.
    pub const INSCRIPTION: Self = Self::InscriptionMatchesType {
        kind: "tpInsc",
        number: "nrInsc",
    };

    /// Field the check reports on; it runs right after that field.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::InscriptionMatchesType { number, .. } => number,
        }
    }

    /// Fields whose own failures make the check moot.
    const fn operands(self) -> [&'static str; 2] {
        match self {
            Self::InscriptionMatchesType { kind, number } => [kind, number],
        }
    }
}

/// Declarative description of a JSON object.
///
/// Fields of every schema in `extends` are checked before the record's own
/// fields. Keys that no schema names are ignored.
#[derive(Debug)]
pub struct RecordSchema {
    /// Name used in diagnostics.
    pub name: &'static str,
    /// Schemas whose fields this record also carries.
    pub extends: &'static [&'static RecordSchema],
    /// Checks over several fields of this record.
    pub checks: &'static [RecordCheck],
    /// Fields declared by this record.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Returns every field, inherited ones first.
    #[must_use]
    pub fn all_fields(&self) -> Vec<&FieldSpec> {
        let mut fields: Vec<&FieldSpec> = self
            .extends
            .iter()
            .flat_map(|parent| parent.all_fields())
            .collect();
        fields.extend(self.fields.iter());
        fields
    }

    /// Returns every record check, inherited ones first.
    #[must_use]
    pub fn all_checks(&self) -> Vec<RecordCheck> {
        let mut checks: Vec<RecordCheck> = self
            .extends
            .iter()
            .flat_map(|parent| parent.all_checks())
            .collect();
        checks.extend_from_slice(self.checks);
        checks
    }

    /// Finds a field by key, including inherited ones.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.all_fields().into_iter().find(|spec| spec.name == name)
    }
}

/// Returns the schema registered for `event_type`.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::EventType;
/// use esocial_guard::esocial::validation::schema::schema_for;
///
/// let schema = schema_for(EventType::S2250);
/// assert!(schema.field("dataFimAviso").is_some());
/// ```
#[must_use]
pub const fn schema_for(event_type: EventType) -> &'static RecordSchema {
    match event_type {
        EventType::S1000 => &employer::S1000,
        EventType::S1200 => &employer::S1200,
        EventType::S1202 => &employer::S1202,
        EventType::S1207 => &employer::S1207,
        EventType::S1210 => &employer::S1210,
        EventType::S2200 => &worker::S2200,
        EventType::S2205 => &worker::S2205,
        EventType::S2206 => &worker::S2206,
        EventType::S2210 => &health::S2210,
        EventType::S2220 => &health::S2220,
        EventType::S2230 => &health::S2230,
        EventType::S2240 => &health::S2240,
        EventType::S2250 => &worker::S2250,
        EventType::S2299 => &worker::S2299,
        EventType::S2300 => &worker::S2300,
        EventType::S2399 => &worker::S2399,
        EventType::S2400 => &worker::S2400,
        EventType::S3000 => &totalizers::S3000,
        EventType::S5001 => &totalizers::S5001,
        EventType::S5002 => &totalizers::S5002,
        EventType::S5003 => &totalizers::S5003,
        EventType::S5011 => &totalizers::S5011,
        EventType::S5012 => &totalizers::S5012,
        EventType::S5013 => &totalizers::S5013,
    }
}

/// Returns `true` for values treated as not supplied.
///
/// `null`, blank strings and empty arrays all count as absent.
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Walks `payload` against `schema`, collecting every structural violation.
///
/// A payload that is not a JSON object yields a single root `FormatError`.
#[must_use]
pub fn validate_structure(
    schema: &RecordSchema,
    payload: &Value,
    config: &ValidationConfig,
) -> Vec<ValidationError> {
    let Some(record) = payload.as_object() else {
        return vec![ValidationError::new(
            FieldPath::root(),
            ErrorCode::FormatError,
            "payload must be a JSON object",
        )];
    };

    let mut walker = StructureWalker {
        config,
        errors: Vec::new(),
    };
    walker.record(schema, record, &FieldPath::root());
    walker.errors
}

struct StructureWalker<'a> {
    config: &'a ValidationConfig,
    errors: Vec<ValidationError>,
}

impl StructureWalker<'_> {
    fn record(&mut self, schema: &RecordSchema, record: &Map<String, Value>, path: &FieldPath) {
        let first = self.errors.len();
        let checks = schema.all_checks();
        for spec in schema.all_fields() {
            let value = record.get(spec.name).filter(|value| !is_absent(value));
            self.field(spec, value, &path.key(spec.name));
            for check in checks.iter().filter(|check| check.anchor() == spec.name) {
                self.record_check(*check, record, path, first);
            }
        }
    }

    fn record_check(
        &mut self,
        check: RecordCheck,
        record: &Map<String, Value>,
        path: &FieldPath,
        first: usize,
    ) {
        let operand_paths = check.operands().map(|name| path.key(name));
        let operand_failed = self
            .errors
            .iter()
            .skip(first)
            .any(|error| operand_paths.contains(error.path()));
        if operand_failed {
            return;
        }

        let present = |key: &str| record.get(key).filter(|value| !is_absent(value));
        match check {
            RecordCheck::InscriptionMatchesType { kind, number } => {
                let (Some(kind_value), Some(number_value)) = (present(kind), present(number))
                else {
                    return;
                };
                let Some(kind_code) = code_text(kind_value) else {
                    return;
                };
                if let Err(failure) = check_inscription_for_type(&kind_code, number_value) {
                    self.errors.push(failure.at(path.key(number)));
                }
            }
        }
    }

    fn field(&mut self, spec: &FieldSpec, value: Option<&Value>, path: &FieldPath) {
        let Some(present) = value else {
            if spec.presence == Presence::Required {
                self.errors.push(ValidationError::required(path.clone()));
            }
            return;
        };

        match spec.shape {
            FieldShape::Scalar(kind) => {
                if let Err(failure) = check_field(kind, present, self.config) {
                    self.errors.push(failure.at(path.clone()));
                }
            }
            FieldShape::Record(schema) => self.nested(schema, present, path),
            FieldShape::List { item, min, max } => self.list(item, min, max, present, path),
        }
    }

    fn nested(&mut self, schema: &RecordSchema, value: &Value, path: &FieldPath) {
        match value.as_object() {
            Some(record) => self.record(schema, record, path),
            None => self.errors.push(ValidationError::new(
                path.clone(),
                ErrorCode::FormatError,
                format!("expected an object matching {}", schema.name),
            )),
        }
    }

    fn list(
        &mut self,
        item: &RecordSchema,
        min: usize,
        max: Option<usize>,
        value: &Value,
        path: &FieldPath,
    ) {
        let Some(items) = value.as_array() else {
            self.errors.push(ValidationError::new(
                path.clone(),
                ErrorCode::FormatError,
                "expected an array",
            ));
            return;
        };

        let limit = max.unwrap_or(self.config.max_collection_items);
        if items.len() < min {
            self.errors.push(ValidationError::new(
                path.clone(),
                ErrorCode::RangeError,
                format!("expected at least {min} items, got {}", items.len()),
            ));
        } else if items.len() > limit {
            self.errors.push(ValidationError::new(
                path.clone(),
                ErrorCode::RangeError,
                format!("expected at most {limit} items, got {}", items.len()),
            ));
        }

        for (index, element) in items.iter().enumerate() {
            self.nested(item, element, &path.index(index));
        }
    }
}
