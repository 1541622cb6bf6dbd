//! Error types for identifier validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The identifier family being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Individual taxpayer ID (CPF), 11 digits.
    IndividualId,
    /// Legal-entity taxpayer ID (CNPJ), 14 digits.
    LegalEntityId,
    /// Worker registration ID (PIS/PASEP/NIS), 11 digits.
    WorkerRegistrationId,
}

impl IdentifierKind {
    /// Returns the number of digits an identifier of this kind carries.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::IndividualId | Self::WorkerRegistrationId => 11,
            Self::LegalEntityId => 14,
        }
    }

    /// Returns the registry acronym used in diagnostics.
    #[must_use]
    pub const fn acronym(self) -> &'static str {
        match self {
            Self::IndividualId => "CPF",
            Self::LegalEntityId => "CNPJ",
            Self::WorkerRegistrationId => "PIS/NIS",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

/// Errors returned when an identifier fails validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier does not have the expected number of digits.
    #[error("{kind} must have {expected} digits, got {actual}")]
    InvalidLength {
        /// The identifier family.
        kind: IdentifierKind,
        /// The required digit count.
        expected: usize,
        /// The digit count after stripping punctuation.
        actual: usize,
    },

    /// The identifier is a single digit repeated, which registries never issue.
    #[error("{0} cannot be a single repeated digit")]
    RepeatedDigits(IdentifierKind),

    /// A check digit does not match the weighted modulo-11 computation.
    #[error("{kind} check digit at position {position} does not match")]
    CheckDigitMismatch {
        /// The identifier family.
        kind: IdentifierKind,
        /// Zero-based position of the failing check digit.
        position: usize,
    },
}

impl IdentifierError {
    /// Returns the identifier family the error refers to.
    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            Self::InvalidLength { kind, .. } | Self::CheckDigitMismatch { kind, .. } => *kind,
            Self::RepeatedDigits(kind) => *kind,
        }
    }

    /// Returns `true` when the digits have the right shape but fail the
    /// check-digit test.
    ///
    /// Repeated-digit sequences count as checksum failures: they have the
    /// right length and are rejected on arithmetic grounds.
    #[must_use]
    pub const fn is_checksum_failure(&self) -> bool {
        matches!(
            self,
            Self::RepeatedDigits(_) | Self::CheckDigitMismatch { .. }
        )
    }
}
