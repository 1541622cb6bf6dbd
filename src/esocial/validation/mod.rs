//! Validation logic for eSocial event payloads.
//!
//! This module provides the default [`EventValidator`] implementation and
//! the pieces it is built from: field validators, the schema registry and
//! the cross-field rule engine.
//!
//! [`EventValidator`]: crate::esocial::ports::validator::EventValidator

pub mod fields;
pub mod rules;
pub mod schema;
pub mod service;

pub use service::DefaultEventValidator;
