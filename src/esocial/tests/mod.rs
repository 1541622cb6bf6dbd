//! Unit tests for the eSocial module.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for the domain types, field validators, schemas, cross-field
//! rules and the validation service.

mod field_tests;
mod service_tests;
