//! Validation diagnostics and domain error types.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers.

use super::FieldPath;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable classification of a validation failure.
///
/// Presentation layers map these codes (plus the field path) to their own
/// localised wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// A required field is absent, null or blank.
    RequiredFieldMissing,
    /// A field is present but has the wrong type or format.
    FormatError,
    /// A numeric value, length or cardinality is outside its bounds.
    RangeError,
    /// An identifier fails its check-digit algorithm.
    ChecksumError,
    /// A temporal ordering or consistency rule across fields is violated.
    CrossFieldError,
    /// The event type tag is not in the catalog.
    UnknownEventType,
}

impl ErrorCode {
    /// Returns the stable wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "RequiredFieldMissing",
            Self::FormatError => "FormatError",
            Self::RangeError => "RangeError",
            Self::ChecksumError => "ChecksumError",
            Self::CrossFieldError => "CrossFieldError",
            Self::UnknownEventType => "UnknownEventType",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code} at '{path}': {message}")]
pub struct ValidationError {
    path: FieldPath,
    code: ErrorCode,
    message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(path: FieldPath, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path,
            code,
            message: message.into(),
        }
    }

    /// Creates a [`ErrorCode::RequiredFieldMissing`] error.
    #[must_use]
    pub fn required(path: FieldPath) -> Self {
        let message = match path.leaf_key() {
            Some(key) => format!("field '{key}' is required"),
            None => "value is required".to_owned(),
        };
        Self::new(path, ErrorCode::RequiredFieldMissing, message)
    }

    /// Creates a [`ErrorCode::CrossFieldError`] error.
    #[must_use]
    pub fn cross_field(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::CrossFieldError, message)
    }

    /// Creates a root-level [`ErrorCode::UnknownEventType`] error.
    #[must_use]
    pub fn unknown_event_type(tag: &str) -> Self {
        Self::new(
            FieldPath::root(),
            ErrorCode::UnknownEventType,
            format!("unknown event type '{tag}'"),
        )
    }

    /// Returns the location of the offending value.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the English diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned while parsing an event type tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown event type: {0}")]
pub struct ParseEventTypeError(pub String);
