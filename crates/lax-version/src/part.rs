use std::cmp::Ordering;

/// One dot-delimited segment of a version string, or one run inside it.
///
/// A segment that is a plain integer becomes [`Part::Integer`]. A segment
/// without any digit/non-digit transition becomes [`Part::Literal`]. A segment
/// that mixes digits and other characters, like `RC11` or `3-beta1`, is split
/// into maximal runs and becomes a [`Part::Composite`] of leaves.
///
/// `PartialEq` is exact identity: two parts are equal only if their raw text
/// and shape match. Use [`Part::semantic_cmp`] and friends for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Part {
    Integer { raw: String, value: i64 },
    Literal { raw: String },
    Composite { raw: String, children: Vec<Part> },
}

/// Stands in for `minor` and `patch` when a version string is too short.
pub(crate) static ZERO: Part = Part::Integer {
    raw: String::new(),
    value: 0,
};

impl Part {
    /// Parses a single segment. Never fails.
    pub fn parse(segment: &str) -> Self {
        if let Ok(value) = segment.parse::<i64>() {
            return Self::Integer {
                raw: segment.to_string(),
                value,
            };
        }

        let runs = split_runs(segment);
        if runs.len() < 2 {
            return Self::Literal {
                raw: segment.to_string(),
            };
        }

        Self::Composite {
            raw: segment.to_string(),
            children: runs.into_iter().map(Self::leaf).collect(),
        }
    }

    fn leaf(run: &str) -> Self {
        if !run.starts_with(|c: char| c.is_ascii_digit()) {
            return Self::Literal {
                raw: run.to_string(),
            };
        }

        match run.parse::<i64>() {
            Ok(value) => Self::Integer {
                raw: run.to_string(),
                value,
            },
            Err(err) => {
                tracing::warn!(run, %err, "Digit run does not fit an integer, treating it as a literal");
                Self::Literal {
                    raw: run.to_string(),
                }
            }
        }
    }

    /// The exact text this part was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Self::Integer { raw, .. } | Self::Literal { raw } | Self::Composite { raw, .. } => raw,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer { .. })
    }

    pub fn int_value(&self) -> Option<i64> {
        match self {
            Self::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Sub-parts of a mixed segment. Empty for leaves.
    pub fn children(&self) -> &[Part] {
        match self {
            Self::Composite { children, .. } => children,
            _ => &[],
        }
    }

    /// Is `self` strictly newer than `other`?
    ///
    /// Every other comparison on parts is derived from this one.
    pub fn greater_than(&self, other: &Part) -> bool {
        use Part::*;

        match (self, other) {
            (Integer { value: a, .. }, Integer { value: b, .. }) => a > b,

            // A release number outranks its own pre-releases (`3` > `3-rc1`),
            // but not a tag that leads with a larger number (`3` < `4-rc1`).
            (Integer { value, .. }, Composite { children, .. }) => match children.first() {
                Some(Integer { value: lead, .. }) => value >= lead,
                _ => true,
            },
            (Integer { .. }, Literal { .. }) => true,
            (_, Integer { .. }) => !other.greater_than(self),

            (Literal { raw: a }, Literal { raw: b }) => {
                caseless_cmp(a, b) == Ordering::Greater
            }
            (Literal { .. }, Composite { .. }) => false,
            (Composite { .. }, Literal { .. }) => true,

            (Composite { children: a, .. }, Composite { children: b, .. }) => {
                for (left, right) in a.iter().zip(b) {
                    if left.greater_than(right) {
                        return true;
                    }
                    if right.greater_than(left) {
                        return false;
                    }
                }
                a.len() > b.len()
            }
        }
    }

    pub fn greater_or_equal(&self, other: &Part) -> bool {
        self.greater_than(other) || !other.greater_than(self)
    }

    pub fn less_than(&self, other: &Part) -> bool {
        !self.greater_or_equal(other)
    }

    /// Neither part is newer than the other, e.g. `rc1` and `RC1`.
    pub fn is_semantically_equal(&self, other: &Part) -> bool {
        !self.greater_than(other) && !other.greater_than(self)
    }

    /// Same raw text and same parsed shape, all the way down.
    pub fn is_fully_identical(&self, other: &Part) -> bool {
        self == other
    }

    pub fn semantic_cmp(&self, other: &Part) -> Ordering {
        if self.greater_than(other) {
            Ordering::Greater
        } else if other.greater_than(self) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Parses a single dot-delimited segment into a [`Part`].
pub fn parse_part(segment: &str) -> Part {
    Part::parse(segment)
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Part {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw())
    }
}

/// Splits `s` into maximal runs that are either all ASCII digits or contain
/// no ASCII digit at all.
fn split_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut last_was_digit = None;

    for (idx, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if last_was_digit.is_some_and(|last| last != is_digit) {
            runs.push(&s[start..idx]);
            start = idx;
        }
        last_was_digit = Some(is_digit);
    }

    if start < s.len() {
        runs.push(&s[start..]);
    }

    runs
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
