//! Validator port for eSocial event payloads.
//!
//! Defines the abstract interface for validating payloads at different
//! layers.

use crate::esocial::domain::{EventEnvelope, EventType, ValidationError, ValidationResult};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Port for event validation operations.
///
/// Validation occurs in layers:
/// 1. Structure validation (required fields, formats, identifier checksums)
/// 2. Cross-field validation (temporal ordering, conditional requirements)
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all errors of a layer before returning (not fail-fast)
/// - Only run cross-field validation on structurally valid payloads
/// - Be stateless and thread-safe
/// - Never read a global clock; `now` is always supplied by the caller
pub trait EventValidator: Send + Sync {
    /// Validates a payload against the schema and rules of `event_type`.
    fn validate(&self, event_type: EventType, payload: &Value, now: DateTime<Utc>)
    -> ValidationResult;

    /// Validates only the structural aspects of a payload.
    ///
    /// Checks:
    /// - The payload is a JSON object
    /// - Required fields are present and non-blank
    /// - Every present field passes its field validator
    /// - Collection cardinalities are within bounds
    /// - Inscription numbers match their inscription type
    fn validate_structure(&self, event_type: EventType, payload: &Value) -> ValidationResult;

    /// Evaluates only the cross-field rules of `event_type`.
    ///
    /// Callers are expected to have validated the structure first. A date
    /// rule whose operand cannot be read as a date reports a
    /// `CrossFieldError` at that field.
    fn validate_cross_field(
        &self,
        event_type: EventType,
        payload: &Value,
        now: DateTime<Utc>,
    ) -> ValidationResult;

    /// Validates a payload whose event type is given as a textual tag.
    ///
    /// Unknown tags yield a single root-level `UnknownEventType` error.
    fn validate_tagged(&self, tag: &str, payload: &Value, now: DateTime<Utc>) -> ValidationResult {
        match EventType::try_from(tag) {
            Ok(event_type) => self.validate(event_type, payload, now),
            Err(_) => {
                tracing::warn!(tag, "rejected payload with unknown event type");
                ValidationResult::single(ValidationError::unknown_event_type(tag))
            }
        }
    }

    /// Validates a raw `{ "type": ..., "payload": ... }` envelope.
    fn validate_envelope(&self, raw: &Value, now: DateTime<Utc>) -> ValidationResult {
        match EventEnvelope::from_json(raw) {
            Ok(envelope) => self.validate(envelope.event_type(), envelope.payload(), now),
            Err(error) => {
                tracing::warn!(%error, "rejected malformed event envelope");
                ValidationResult::single(error)
            }
        }
    }
}

/// Configuration for validation rules.
///
/// Allows customization of validation behaviour for different contexts.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.accepts_year(2100));
///
/// let strict = ValidationConfig::strict();
/// assert!(!strict.accepts_year(2100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Earliest calendar year accepted in date fields.
    pub min_year: i32,
    /// Latest calendar year accepted in date fields.
    pub max_year: i32,
    /// Maximum items in a collection that declares no explicit bound.
    pub max_collection_items: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
            max_collection_items: 999,
        }
    }
}

impl ValidationConfig {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful when payloads come from untrusted batch imports.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_year: 1900,
            max_year: 2099,
            max_collection_items: 99,
        }
    }

    /// Returns a copy accepting years in `min_year..=max_year`.
    #[must_use]
    pub const fn with_year_window(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Returns a copy with a different default collection bound.
    #[must_use]
    pub const fn with_max_collection_items(mut self, max_collection_items: usize) -> Self {
        self.max_collection_items = max_collection_items;
        self
    }

    /// Returns `true` when `year` lies inside the configured window.
    #[must_use]
    pub const fn accepts_year(&self, year: i32) -> bool {
        year >= self.min_year && year <= self.max_year
    }
}
