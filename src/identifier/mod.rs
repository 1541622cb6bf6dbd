//! National identifier validation for Brazilian registries.
//!
//! This module implements the weighted modulo-11 check-digit algorithms for
//! the three identifier families that appear in eSocial payloads:
//!
//! - **Individual ID** (CPF): 11 digits, two check digits
//! - **Legal-entity ID** (CNPJ): 14 digits, two check digits
//! - **Worker registration ID** (PIS/PASEP/NIS): 11 digits, one check digit
//!
//! The [`checksum`] functions are pure and total: they strip punctuation,
//! never panic and report failures as values. The value objects in
//! [`IndividualId`], [`LegalEntityId`] and [`WorkerRegistrationId`] cannot be
//! constructed unless the checksum passes.
//!
//! # Example
//!
//! ```
//! use esocial_guard::identifier::{IndividualId, checksum};
//!
//! assert!(checksum::validate_individual_id("111.444.777-35"));
//! assert!(!checksum::validate_individual_id("111.111.111-11"));
//!
//! let cpf = IndividualId::new("111.444.777-35").expect("valid CPF");
//! assert_eq!(cpf.as_str(), "11144477735");
//! assert_eq!(cpf.formatted(), "111.444.777-35");
//! ```

pub mod checksum;
mod error;
mod ids;

pub use error::{IdentifierError, IdentifierKind};
pub use ids::{IndividualId, LegalEntityId, WorkerRegistrationId};

#[cfg(test)]
mod tests;
