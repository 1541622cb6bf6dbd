//! Cross-field rules evaluated over whole payloads.
//!
//! Rules are plain values listed per event type in [`rules_for`]. Each
//! names a scope selector and field paths relative to that scope, so a
//! rule never depends on an implicit parent context. Violations are
//! reported at the dependent field, never at the discriminator.

mod catalog;
pub mod selector;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::collections::HashSet;

pub use catalog::rules_for;
use selector::{Scope, resolve};

use super::fields::{code_text, parse_temporal};
use crate::esocial::domain::{ErrorCode, FieldPath, ValidationError};

/// Predicate a discriminator value must satisfy for a conditional
/// requirement to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The discriminator equals the given code.
    Equals(&'static str),
    /// The discriminator is one of the given codes.
    OneOf(&'static [&'static str]),
    /// The discriminator is the given boolean.
    Flag(bool),
    /// The discriminator is present and not blank.
    Present,
}

impl Condition {
    fn holds(self, discriminator: Option<&Value>) -> bool {
        let Some(value) = discriminator else {
            return false;
        };
        match self {
            Self::Equals(expected) => code_text(value).is_some_and(|text| text == expected),
            Self::OneOf(allowed) => code_text(value).is_some_and(|text| allowed.contains(&&*text)),
            Self::Flag(expected) => value.as_bool() == Some(expected),
            Self::Present => true,
        }
    }
}

/// A declarative refinement over a payload.
///
/// `scope` selectors use `[]` to fan out over arrays (see
/// [`selector::resolve`]); the remaining string fields are dotted paths
/// relative to each resolved scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// `end` must not precede `start` when `end` is present.
    DateOrder {
        /// Scope selector.
        scope: &'static str,
        /// Field holding the earlier date.
        start: &'static str,
        /// Field holding the later date.
        end: &'static str,
    },
    /// The date must not be after the reference day.
    NotInFuture {
        /// Scope selector.
        scope: &'static str,
        /// Date field.
        field: &'static str,
    },
    /// The date must not be before the reference day.
    NotInPast {
        /// Scope selector.
        scope: &'static str,
        /// Date field.
        field: &'static str,
    },
    /// `dependent` must be present whenever `discriminator` satisfies
    /// `condition`.
    RequiredWhen {
        /// Scope selector.
        scope: &'static str,
        /// Field inspected by the condition.
        discriminator: &'static str,
        /// Predicate over the discriminator.
        condition: Condition,
        /// Field that becomes required.
        dependent: &'static str,
    },
    /// No two elements of `list` may share the same `key`.
    UniqueWithin {
        /// Selector of the array.
        list: &'static str,
        /// Key compared across elements.
        key: &'static str,
    },
}

impl CrossFieldRule {
    /// Returns `true` for conditional requirements.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        matches!(self, Self::RequiredWhen { .. })
    }

    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DateOrder { .. } => "date_order",
            Self::NotInFuture { .. } => "not_in_future",
            Self::NotInPast { .. } => "not_in_past",
            Self::RequiredWhen { .. } => "required_when",
            Self::UniqueWithin { .. } => "unique_within",
        }
    }

    /// Evaluates the rule against `payload` with `now` as the reference
    /// instant.
    #[must_use]
    pub fn evaluate(&self, payload: &Value, now: DateTime<Utc>) -> Vec<ValidationError> {
        let today = now.date_naive();
        match *self {
            Self::DateOrder { scope, start, end } => per_scope(payload, scope, |node| {
                date_order(node, start, end)
            }),
            Self::NotInFuture { scope, field } => per_scope(payload, scope, |node| {
                let accept = |date: NaiveDate| date <= today;
                compare_to_today(node, field, today, accept, "must not be in the future")
            }),
            Self::NotInPast { scope, field } => per_scope(payload, scope, |node| {
                let accept = |date: NaiveDate| date >= today;
                compare_to_today(node, field, today, accept, "must not be in the past")
            }),
            Self::RequiredWhen {
                scope,
                discriminator,
                condition,
                dependent,
            } => per_scope(payload, scope, |node| {
                required_when(node, discriminator, condition, dependent)
            }),
            Self::UniqueWithin { list, key } => unique_within(payload, list, key),
        }
    }
}

/// Evaluates `rules` in two phases.
///
/// Conditional requirements run first; when any of them fires, the
/// remaining rules are skipped so that a missing field is never also
/// reported as an ordering or consistency failure.
#[must_use]
pub fn evaluate(
    rules: &[CrossFieldRule],
    payload: &Value,
    now: DateTime<Utc>,
) -> Vec<ValidationError> {
    let (conditional, consistency): (Vec<_>, Vec<_>) =
        rules.iter().partition(|rule| rule.is_conditional());

    let missing = run_phase(&conditional, payload, now);
    if !missing.is_empty() {
        return missing;
    }
    run_phase(&consistency, payload, now)
}

fn run_phase(
    rules: &[&CrossFieldRule],
    payload: &Value,
    now: DateTime<Utc>,
) -> Vec<ValidationError> {
    rules
        .iter()
        .flat_map(|rule| {
            let errors = rule.evaluate(payload, now);
            for error in &errors {
                tracing::trace!(
                    rule = rule.name(),
                    path = %error.path(),
                    code = %error.code(),
                    "cross-field rule failed"
                );
            }
            errors
        })
        .collect()
}

fn per_scope<'a>(
    payload: &'a Value,
    selector: &str,
    check: impl Fn(&Scope<'a>) -> Option<ValidationError>,
) -> Vec<ValidationError> {
    resolve(payload, selector).iter().filter_map(check).collect()
}

fn date_order(node: &Scope<'_>, start: &str, end: &str) -> Option<ValidationError> {
    let (end_path, end_value) = node.lookup(end);
    let Some(end_date) = parse_temporal(end_value?) else {
        return Some(unreadable(end_path, end));
    };

    let (_, start_value) = node.lookup(start);
    let Some(start_date) = start_value.and_then(parse_temporal) else {
        return Some(ValidationError::cross_field(
            end_path,
            format!("'{end}' cannot be checked because '{start}' is missing or invalid"),
        ));
    };

    (end_date < start_date).then(|| {
        ValidationError::cross_field(
            end_path,
            format!("'{end}' ({end_date}) must not be before '{start}' ({start_date})"),
        )
    })
}

fn compare_to_today(
    node: &Scope<'_>,
    field: &str,
    today: NaiveDate,
    accept: impl Fn(NaiveDate) -> bool,
    message: &str,
) -> Option<ValidationError> {
    let (path, value) = node.lookup(field);
    let Some(date) = parse_temporal(value?) else {
        return Some(unreadable(path, field));
    };
    (!accept(date)).then(|| {
        ValidationError::cross_field(path, format!("'{field}' ({date}) {message} ({today})"))
    })
}

fn unreadable(path: FieldPath, field: &str) -> ValidationError {
    ValidationError::cross_field(
        path,
        format!("'{field}' cannot be compared because it is not a valid date"),
    )
}

fn required_when(
    node: &Scope<'_>,
    discriminator: &str,
    condition: Condition,
    dependent: &str,
) -> Option<ValidationError> {
    let (_, trigger) = node.lookup(discriminator);
    if !condition.holds(trigger) {
        return None;
    }
    let (path, value) = node.lookup(dependent);
    value.is_none().then(|| {
        ValidationError::new(
            path,
            ErrorCode::RequiredFieldMissing,
            format!("field '{dependent}' is required when '{discriminator}' is set accordingly"),
        )
    })
}

fn unique_within(payload: &Value, list: &str, key: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for scope in resolve(payload, list) {
        let Some(items) = scope.value.as_array() else {
            continue;
        };
        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            let element = Scope {
                path: scope.path.index(index),
                value: item,
            };
            let (path, value) = element.lookup(key);
            let Some(text) = value.and_then(code_text) else {
                continue;
            };
            if !seen.insert(text.clone()) {
                errors.push(ValidationError::cross_field(
                    path,
                    format!("'{key}' value '{text}' is repeated in '{list}'"),
                ));
            }
        }
    }
    errors
}
