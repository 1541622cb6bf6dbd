//! Validation service implementation.
//!
//! Provides the default implementation of the `EventValidator` port,
//! running structural validation and, for structurally valid payloads,
//! the cross-field rules of the event type.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;

use crate::esocial::{
    domain::{EventType, ValidationResult},
    ports::validator::{EventValidator, ValidationConfig},
    validation::{rules, schema},
};

/// Default implementation of the event validator.
///
/// Collects every structural error rather than failing on the first one,
/// and only evaluates cross-field rules once the structure is clean.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use esocial_guard::esocial::domain::{ErrorCode, EventType};
/// use esocial_guard::esocial::ports::validator::EventValidator;
/// use esocial_guard::esocial::validation::service::DefaultEventValidator;
/// use serde_json::json;
///
/// let validator = DefaultEventValidator::new();
/// let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
/// let result = validator.validate(EventType::S2250, &json!({ "cpf": "111.444.777-35" }), now);
///
/// assert!(!result.is_valid());
/// assert!(result.has_code(ErrorCode::RequiredFieldMissing));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultEventValidator {
    config: ValidationConfig,
}

impl DefaultEventValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a payload using `clock` as the reference time.
    #[must_use]
    pub fn validate_at(
        &self,
        event_type: EventType,
        payload: &Value,
        clock: &impl Clock,
    ) -> ValidationResult {
        self.validate(event_type, payload, clock.utc())
    }
}

impl Default for DefaultEventValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventValidator for DefaultEventValidator {
    fn validate(
        &self,
        event_type: EventType,
        payload: &Value,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        let structural = self.validate_structure(event_type, payload);
        if !structural.is_valid() {
            tracing::debug!(
                %event_type,
                stage = "structure",
                errors = structural.errors().len(),
                "event payload rejected"
            );
            return structural;
        }

        let result = self.validate_cross_field(event_type, payload, now);
        tracing::debug!(
            %event_type,
            stage = "cross_field",
            errors = result.errors().len(),
            valid = result.is_valid(),
            "event payload validated"
        );
        result
    }

    fn validate_structure(&self, event_type: EventType, payload: &Value) -> ValidationResult {
        ValidationResult::from_errors(schema::validate_structure(
            schema::schema_for(event_type),
            payload,
            &self.config,
        ))
    }

    fn validate_cross_field(
        &self,
        event_type: EventType,
        payload: &Value,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        ValidationResult::from_errors(rules::evaluate(rules::rules_for(event_type), payload, now))
    }
}

// Note: Unit tests for DefaultEventValidator are located in
// src/esocial/tests/service_tests.rs.
