//! Port trait definitions for eSocial event validation.
//!
//! Ports define the interface callers use to validate candidate payloads,
//! independently of how schemas and rules are stored.

pub mod validator;

pub use validator::{EventValidator, ValidationConfig};
