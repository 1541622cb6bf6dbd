//! Field paths locating values inside nested payloads.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A record key.
    Key(String),
    /// A zero-based array index.
    Index(usize),
}

/// Ordered sequence of keys and indices addressing a value in a payload.
///
/// Displays as `dmDev[2].ideEstabLot[0].codLotacao`; the root path displays
/// as the empty string. Paths are immutable: [`FieldPath::key`] and
/// [`FieldPath::index`] return extended copies.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::FieldPath;
///
/// let path = FieldPath::root()
///     .key("dmDev")
///     .index(2)
///     .key("ideEstabLot")
///     .index(0)
///     .key("codLotacao");
/// assert_eq!(path.to_string(), "dmDev[2].ideEstabLot[0].codLotacao");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Returns the empty path addressing the payload itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a dotted path such as `infoPerApur.ideEstabLot[0].codLotacao`.
    ///
    /// Malformed index suffixes are kept as part of the key.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        let mut path = Self::root();
        for part in dotted.split('.').filter(|part| !part.is_empty()) {
            path = path.join_part(part);
        }
        path
    }

    /// Returns a copy extended with a record key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with(PathSegment::Key(key.into()))
    }

    /// Returns a copy extended with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.with(PathSegment::Index(index))
    }

    /// Returns a copy extended with every segment of `relative`.
    #[must_use]
    pub fn join(&self, relative: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(relative.segments.iter().cloned());
        Self { segments }
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the final key, ignoring trailing indices.
    #[must_use]
    pub fn leaf_key(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    fn with(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    fn join_part(self, part: &str) -> Self {
        let Some((key, rest)) = part.split_once('[') else {
            return self.key(part);
        };

        let mut path = if key.is_empty() { self } else { self.key(key) };
        for raw_index in rest.split('[') {
            match raw_index.strip_suffix(']').and_then(|n| n.parse().ok()) {
                Some(index) => path = path.index(index),
                None => return path.key(format!("[{raw_index}")),
            }
        }
        path
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}
