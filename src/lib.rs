//! eSocial Guard: validation engine for eSocial labour-reporting events.
//!
//! This crate decides whether a candidate eSocial event payload is
//! well-formed before a caller persists it or hands it to the submission
//! layer. Validation is pure and synchronous: callers supply the payload and
//! a reference "now", and receive a [`esocial::domain::ValidationResult`]
//! listing every violation with its field path.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the validation service
//! - **Validation**: Field validators, schema registry, cross-field rules and
//!   the result aggregator
//!
//! # Modules
//!
//! - [`identifier`]: National identifier check-digit validation (CPF, CNPJ,
//!   PIS/NIS)
//! - [`esocial`]: Event catalog, schemas and the validation pipeline

pub mod esocial;
pub mod identifier;
