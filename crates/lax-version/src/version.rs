use std::{cmp::Ordering, convert::Infallible, str::FromStr};

use crate::part::{Part, ZERO};

/// Reasons a parsed version is not usable as a release number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Version has no parts")]
    Empty,
    #[error("Major version is not an integer: {major}")]
    NonIntegerMajor { major: String },
    #[error("Major version is negative: {major}")]
    NegativeMajor { major: String },
}

/// A version string split on `.` into [`Part`]s.
///
/// Any string parses into a `Version`, however odd. Ordering only looks at
/// `major`, `minor` and `patch`; later parts are kept for display.
///
/// `PartialEq` compares every part exactly. Use
/// [`Version::is_semantically_equal`] to ask whether two versions rank the
/// same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde_with::DeserializeFromStr))]
pub struct Version {
    parts: Vec<Part>,
}

impl Version {
    /// A plain `major.minor.patch` release.
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        let parts = [major, minor, patch]
            .into_iter()
            .map(|value| Part::Integer {
                raw: value.to_string(),
                value,
            })
            .collect();
        Self { parts }
    }

    /// Parses `text`, dropping a single leading `v` or `V`. Never fails.
    pub fn parse(text: &str) -> Self {
        let text = text
            .strip_prefix(|c: char| c == 'v' || c == 'V')
            .unwrap_or(text);
        let parts = text.split('.').map(Part::parse).collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn major(&self) -> &Part {
        self.parts.first().unwrap_or(&ZERO)
    }

    pub fn minor(&self) -> &Part {
        self.parts.get(1).unwrap_or(&ZERO)
    }

    pub fn patch(&self) -> &Part {
        self.parts.get(2).unwrap_or(&ZERO)
    }

    pub fn is_non_empty(&self) -> bool {
        !self.parts.is_empty()
    }

    /// Every part is a plain integer, e.g. `1.2.3` but not `1.2.3-rc1`.
    pub fn is_semver_release(&self) -> bool {
        self.is_non_empty() && self.parts.iter().all(Part::is_integer)
    }

    /// Checks that there is at least one part and the major part is a
    /// non-negative integer.
    pub fn validate(&self) -> Result<(), VersionError> {
        if !self.is_non_empty() {
            return Err(VersionError::Empty);
        }
        match self.major().int_value() {
            Some(value) if value >= 0 => Ok(()),
            Some(_) => Err(VersionError::NegativeMajor {
                major: self.major().raw().to_string(),
            }),
            None => Err(VersionError::NonIntegerMajor {
                major: self.major().raw().to_string(),
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// All parts rejoined with `.`, unlike [`Display`](std::fmt::Display)
    /// which stops after `patch`.
    pub fn raw_joined(&self) -> String {
        self.parts
            .iter()
            .map(Part::raw)
            .collect::<Vec<_>>()
            .join(".")
    }

    fn ranked(&self) -> [&Part; 3] {
        [self.major(), self.minor(), self.patch()]
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        // TODO: parts past `patch` should take part in ordering once callers
        // no longer rely on `1.2.3.4` ranking equal to `1.2.3.5`.
        for (ours, theirs) in self.ranked().into_iter().zip(other.ranked()) {
            if ours.greater_than(theirs) {
                return true;
            }
            if ours.less_than(theirs) {
                return false;
            }
        }
        false
    }

    pub fn greater_or_equal(&self, other: &Version) -> bool {
        self.greater_than(other) || self.is_semantically_equal(other)
    }

    pub fn less_than(&self, other: &Version) -> bool {
        !self.greater_or_equal(other)
    }

    pub fn is_semantically_equal(&self, other: &Version) -> bool {
        !self.greater_than(other) && !other.greater_than(self)
    }

    /// `major`, `minor` and `patch` are exactly identical, including their
    /// raw text. `1.2` is not fully identical to `1.2.0`.
    pub fn is_fully_identical(&self, other: &Version) -> bool {
        self.ranked()
            .into_iter()
            .zip(other.ranked())
            .all(|(ours, theirs)| ours.is_fully_identical(theirs))
    }

    /// Orders versions the same way as [`Version::greater_than`], for use
    /// with `sort_by`, `max_by` and similar.
    pub fn semantic_cmp(&self, other: &Version) -> Ordering {
        if self.greater_than(other) {
            Ordering::Greater
        } else if other.greater_than(self) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Parses a version string. See [`Version::parse`].
pub fn parse_version(text: &str) -> Version {
    Version::parse(text)
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Version {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Version {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw_joined())
    }
}
