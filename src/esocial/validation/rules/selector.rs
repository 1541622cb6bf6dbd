//! Resolution of scope selectors and relative field paths.
//!
//! A selector is a dotted key path in which a `[]` suffix fans out over
//! every element of an array: `dmDev[].infoPerApur.ideEstabLot[]` yields
//! one scope per establishment of every statement. The empty selector is
//! the payload root.

use serde_json::Value;

use crate::esocial::domain::FieldPath;
use crate::esocial::validation::schema::is_absent;

/// A resolved scope: the object a rule is applied to and where it lives.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    /// Location of the scope in the payload.
    pub path: FieldPath,
    /// The scope value.
    pub value: &'a Value,
}

impl<'a> Scope<'a> {
    /// Looks up a dotted path relative to the scope.
    ///
    /// Returns the absolute path together with the value, if present and
    /// not blank.
    #[must_use]
    pub fn lookup(&self, relative: &str) -> (FieldPath, Option<&'a Value>) {
        let mut path = self.path.clone();
        let mut current = Some(self.value);
        for key in relative.split('.').filter(|key| !key.is_empty()) {
            path = path.key(key);
            current = current.and_then(|value| value.get(key));
        }
        (path, current.filter(|value| !is_absent(value)))
    }
}

/// Resolves `selector` against `payload`.
///
/// Missing intermediate keys produce no scopes; rules over absent blocks
/// are vacuously satisfied.
#[must_use]
pub fn resolve<'a>(payload: &'a Value, selector: &str) -> Vec<Scope<'a>> {
    let mut scopes = vec![Scope {
        path: FieldPath::root(),
        value: payload,
    }];

    for part in selector.split('.').filter(|part| !part.is_empty()) {
        let (key, fan_out) = match part.strip_suffix("[]") {
            Some(key) => (key, true),
            None => (part, false),
        };
        scopes = scopes
            .into_iter()
            .flat_map(|scope| step(scope, key, fan_out))
            .collect();
    }

    scopes
}

fn step<'a>(scope: Scope<'a>, key: &str, fan_out: bool) -> Vec<Scope<'a>> {
    let path = scope.path.key(key);
    let Some(child) = scope.value.get(key).filter(|value| !is_absent(value)) else {
        return Vec::new();
    };

    if !fan_out {
        return vec![Scope { path, value: child }];
    }

    child
        .as_array()
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, value)| Scope {
                    path: path.index(index),
                    value,
                })
                .collect()
        })
        .unwrap_or_default()
}
