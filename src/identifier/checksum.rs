//! Weighted modulo-11 check-digit algorithms.
//!
//! Every public function first strips all non-digit characters, so both
//! masked (`111.444.777-35`) and bare (`11144477735`) forms are accepted.
//! Functions are total: malformed input yields `false` or an
//! [`IdentifierError`], never a panic.

use super::{IdentifierError, IdentifierKind};

const INDIVIDUAL_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const INDIVIDUAL_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const LEGAL_ENTITY_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const LEGAL_ENTITY_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const WORKER_REGISTRATION_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// One check digit: the weights cover the digits preceding it, so the check
/// digit sits at index `weights.len()`.
struct CheckStage {
    weights: &'static [u32],
    reduce: fn(u32) -> u32,
}

const INDIVIDUAL_STAGES: [CheckStage; 2] = [
    CheckStage {
        weights: &INDIVIDUAL_FIRST_WEIGHTS,
        reduce: complement_mod11,
    },
    CheckStage {
        weights: &INDIVIDUAL_SECOND_WEIGHTS,
        reduce: complement_mod11,
    },
];

const LEGAL_ENTITY_STAGES: [CheckStage; 2] = [
    CheckStage {
        weights: &LEGAL_ENTITY_FIRST_WEIGHTS,
        reduce: remainder_mod11,
    },
    CheckStage {
        weights: &LEGAL_ENTITY_SECOND_WEIGHTS,
        reduce: remainder_mod11,
    },
];

const WORKER_REGISTRATION_STAGES: [CheckStage; 1] = [CheckStage {
    weights: &WORKER_REGISTRATION_WEIGHTS,
    reduce: remainder_mod11,
}];

/// Returns `true` when `raw` is a valid individual taxpayer ID (CPF).
#[must_use]
pub fn validate_individual_id(raw: &str) -> bool {
    check_individual_id(raw).is_ok()
}

/// Returns `true` when `raw` is a valid legal-entity taxpayer ID (CNPJ).
#[must_use]
pub fn validate_legal_entity_id(raw: &str) -> bool {
    check_legal_entity_id(raw).is_ok()
}

/// Returns `true` when `raw` is a valid worker registration ID (PIS/NIS).
#[must_use]
pub fn validate_worker_registration_id(raw: &str) -> bool {
    check_worker_registration_id(raw).is_ok()
}

/// Checks an individual taxpayer ID (CPF).
///
/// Each check digit is `11 - (weighted sum mod 11)`, mapped to `0` when the
/// result is 10 or 11.
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidLength`] when the input does not carry
/// exactly 11 digits, [`IdentifierError::RepeatedDigits`] for degenerate
/// input, or [`IdentifierError::CheckDigitMismatch`] for the first failing
/// check digit.
pub fn check_individual_id(raw: &str) -> Result<(), IdentifierError> {
    check(raw, IdentifierKind::IndividualId, &INDIVIDUAL_STAGES)
}

/// Checks a legal-entity taxpayer ID (CNPJ).
///
/// Each check digit is `0` when `weighted sum mod 11 < 2`, otherwise
/// `11 - remainder`.
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidLength`] when the input does not carry
/// exactly 14 digits, [`IdentifierError::RepeatedDigits`] for degenerate
/// input, or [`IdentifierError::CheckDigitMismatch`] for the first failing
/// check digit.
pub fn check_legal_entity_id(raw: &str) -> Result<(), IdentifierError> {
    check(raw, IdentifierKind::LegalEntityId, &LEGAL_ENTITY_STAGES)
}

/// Checks a worker registration ID (PIS/PASEP/NIS).
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidLength`] when the input does not carry
/// exactly 11 digits, [`IdentifierError::RepeatedDigits`] for degenerate
/// input, or [`IdentifierError::CheckDigitMismatch`] when the check digit
/// fails.
pub fn check_worker_registration_id(raw: &str) -> Result<(), IdentifierError> {
    check(
        raw,
        IdentifierKind::WorkerRegistrationId,
        &WORKER_REGISTRATION_STAGES,
    )
}

/// Checks `raw` against the algorithm for `kind`.
///
/// # Errors
///
/// See the kind-specific `check_*` functions.
pub fn check_kind(raw: &str, kind: IdentifierKind) -> Result<(), IdentifierError> {
    match kind {
        IdentifierKind::IndividualId => check_individual_id(raw),
        IdentifierKind::LegalEntityId => check_legal_entity_id(raw),
        IdentifierKind::WorkerRegistrationId => check_worker_registration_id(raw),
    }
}

/// Strips every non-digit character from `raw`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn check(raw: &str, kind: IdentifierKind, stages: &[CheckStage]) -> Result<(), IdentifierError> {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    let expected = kind.digit_count();
    if digits.len() != expected {
        return Err(IdentifierError::InvalidLength {
            kind,
            expected,
            actual: digits.len(),
        });
    }

    if is_repeated(&digits) {
        return Err(IdentifierError::RepeatedDigits(kind));
    }

    for stage in stages {
        let position = stage.weights.len();
        let computed = (stage.reduce)(weighted_sum(&digits, stage.weights));
        if digits.get(position) != Some(&computed) {
            return Err(IdentifierError::CheckDigitMismatch { kind, position });
        }
    }

    Ok(())
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().all(|digit| digit == first))
}

/// `11 - (sum mod 11)`, where 10 and 11 collapse to 0.
fn complement_mod11(sum: u32) -> u32 {
    let digit = 11 - sum.rem_euclid(11);
    if digit >= 10 { 0 } else { digit }
}

/// `0` when `sum mod 11 < 2`, otherwise `11 - remainder`.
fn remainder_mod11(sum: u32) -> u32 {
    let remainder = sum.rem_euclid(11);
    if remainder < 2 { 0 } else { 11 - remainder }
}
