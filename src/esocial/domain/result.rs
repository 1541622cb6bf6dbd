//! The outcome of validating one event payload.

use super::{ErrorCode, FieldPath, ValidationError};
use serde::Serialize;

/// Outcome of a validation call.
///
/// The `valid` flag is derived from the error list at construction, so
/// `is_valid() == errors().is_empty()` always holds.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::ValidationResult;
///
/// let result = ValidationResult::from_errors(Vec::new());
/// assert!(result.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a result from collected errors.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Creates a failing result holding a single error.
    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        Self::from_errors(vec![error])
    }

    /// Returns `true` when no errors were collected.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the collected errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Returns the errors carrying `code`.
    pub fn errors_with_code(&self, code: ErrorCode) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |error| error.code() == code)
    }

    /// Returns the errors attached to `path`.
    pub fn errors_at<'a>(
        &'a self,
        path: &'a FieldPath,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |error| error.path() == path)
    }

    /// Returns `true` when any error carries `code`.
    #[must_use]
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors_with_code(code).next().is_some()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::from_errors(errors)
    }
}
