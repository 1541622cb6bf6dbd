//! eSocial event catalog and validation pipeline.
//!
//! This module implements the closed catalog of event types, their record
//! schemas and the cross-field rules that relate fields of one payload.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::EventType`], [`domain::FieldPath`], [`domain::ValidationResult`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::validator::EventValidator`])
//! - **Validation**: Field validators, schema registry, cross-field rules and
//!   the default validator ([`validation::service::DefaultEventValidator`])
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use esocial_guard::esocial::{self, domain::{ErrorCode, EventType}};
//! use serde_json::json;
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let payload = json!({
//!     "cpf": "111.444.777-35",
//!     "dataAviso": "2024-02-01",
//!     "dataInicioAviso": "2024-03-01",
//!     "dataFimAviso": "2024-02-01",
//!     "tipoAviso": "1",
//!     "codigoMotivoAviso": "01"
//! });
//!
//! let result = esocial::validate(EventType::S2250, &payload, now);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.errors()[0].code(), ErrorCode::CrossFieldError);
//! assert_eq!(result.errors()[0].path().to_string(), "dataFimAviso");
//! ```

pub mod domain;
pub mod ports;
pub mod validation;

use chrono::{DateTime, Utc};
use serde_json::Value;

use domain::{EventType, ValidationResult};
use ports::validator::EventValidator;
use validation::service::DefaultEventValidator;

/// Validates `payload` as an event of `event_type` using the default
/// configuration.
#[must_use]
pub fn validate(event_type: EventType, payload: &Value, now: DateTime<Utc>) -> ValidationResult {
    DefaultEventValidator::new().validate(event_type, payload, now)
}

#[cfg(test)]
mod tests;
