//! Version values and comparison constraints.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// A parsed tool version: dot-separated integers plus an optional suffix.
///
/// `PartialEq` is structural (suffix included). Version *ordering* goes
/// through [`Version::compare`], which only looks at the numeric components
/// both versions have in common, so `3.8` and `3.8.1` compare as equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    number: Vec<u64>,
    extra: Option<String>,
}

impl Version {
    /// Create a version. Returns `None` when `number` is empty.
    pub fn new(number: Vec<u64>, extra: Option<String>) -> Option<Self> {
        if number.is_empty() {
            return None;
        }
        Some(Self {
            number,
            extra: extra.filter(|e| !e.is_empty()),
        })
    }

    /// Create a suffix-free version from its numeric components.
    ///
    /// # Panics
    ///
    /// Panics if `number` is empty.
    pub fn from_numbers(number: &[u64]) -> Self {
        assert!(!number.is_empty(), "a version needs a numeric component");
        Self {
            number: number.to_vec(),
            extra: None,
        }
    }

    /// Numeric components, most significant first.
    pub fn number(&self) -> &[u64] {
        &self.number
    }

    /// Trailing non-numeric text, e.g. `rc1` in `3.9.1rc1`.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Compare two versions component by component.
    ///
    /// Only the common prefix of the two numeric sequences is compared and
    /// the suffix is ignored.
    pub fn compare(&self, other: &Version) -> Ordering {
        for (n, m) in self.number.iter().zip(&other.number) {
            match n.cmp(m) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.number {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", n)?;
            first = false;
        }
        if let Some(extra) = &self.extra {
            f.write_str(extra)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `>=`
    GE,
    /// `<=`
    LE,
    /// `<`
    LT,
    /// `>`
    GT,
    /// `==`
    EQ,
    /// `!=`
    NE,
}

impl Relation {
    /// All relations, in the order the parser tries their symbols.
    pub const ALL: [Relation; 6] = [
        Relation::LE,
        Relation::GE,
        Relation::LT,
        Relation::GT,
        Relation::EQ,
        Relation::NE,
    ];

    /// Canonical symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::GE => ">=",
            Relation::LE => "<=",
            Relation::LT => "<",
            Relation::GT => ">",
            Relation::EQ => "==",
            Relation::NE => "!=",
        }
    }

    /// Whether `candidate <relation> target` holds given `candidate.compare(target)`.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Relation::GE => ordering != Ordering::Less,
            Relation::LE => ordering != Ordering::Greater,
            Relation::LT => ordering == Ordering::Less,
            Relation::GT => ordering == Ordering::Greater,
            Relation::EQ => ordering == Ordering::Equal,
            Relation::NE => ordering != Ordering::Equal,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A relation bound to a target version, e.g. `>=3.8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub version: Version,
    pub relation: Relation,
}

impl VersionConstraint {
    pub fn new(version: Version, relation: Relation) -> Self {
        Self { version, relation }
    }

    /// Whether `candidate` satisfies this constraint.
    pub fn is_satisfied_by(&self, candidate: &Version) -> bool {
        self.relation.accepts(candidate.compare(&self.version))
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.relation, self.version)
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
