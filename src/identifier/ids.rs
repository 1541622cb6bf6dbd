//! Checksum-validated identifier value objects.

use super::{IdentifierError, checksum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implements `Deserialize` by routing the raw string through `new()`, so
/// invalid identifiers are rejected at deserialisation time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Shared accessors for digit-string identifiers.
macro_rules! impl_digit_identifier {
    ($ty:ident, $check:path, $mask:literal) => {
        impl $ty {
            /// Validates and normalises an identifier, accepting masked or
            /// bare input.
            ///
            /// # Errors
            ///
            /// Returns [`IdentifierError`] when the digit count is wrong, the
            /// digits are a single repeated digit, or a check digit fails.
            pub fn new(input: impl AsRef<str>) -> Result<Self, IdentifierError> {
                let raw = input.as_ref();
                $check(raw)?;
                Ok(Self(checksum::normalize(raw)))
            }

            /// Returns the bare digits.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the identifier in its conventional printed mask.
            #[must_use]
            pub fn formatted(&self) -> String {
                apply_mask(&self.0, $mask)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = IdentifierError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl_validating_deserialize!($ty);
    };
}

/// Individual taxpayer ID (CPF).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IndividualId(String);

/// Legal-entity taxpayer ID (CNPJ).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LegalEntityId(String);

/// Worker registration ID (PIS/PASEP/NIS).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkerRegistrationId(String);

impl_digit_identifier!(
    IndividualId,
    checksum::check_individual_id,
    "###.###.###-##"
);
impl_digit_identifier!(
    LegalEntityId,
    checksum::check_legal_entity_id,
    "##.###.###/####-##"
);
impl_digit_identifier!(
    WorkerRegistrationId,
    checksum::check_worker_registration_id,
    "###.#####.##-#"
);

/// Replaces each `#` in `mask` with the next digit.
fn apply_mask(digits: &str, mask: &str) -> String {
    let mut remaining = digits.chars();
    mask.chars()
        .filter_map(|slot| {
            if slot == '#' {
                remaining.next()
            } else {
                Some(slot)
            }
        })
        .collect()
}
