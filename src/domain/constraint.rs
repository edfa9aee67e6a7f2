//! Version constraints: comparator clauses, implicitly ANDed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{AppError, Version};

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparator {
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "~=")]
    Compatible,
    #[serde(rename = "===")]
    Arbitrary,
}

impl Comparator {
    /// Longest operators first so that prefix matching is unambiguous.
    const ALL: [Comparator; 8] = [
        Comparator::Arbitrary,
        Comparator::Equal,
        Comparator::NotEqual,
        Comparator::GreaterOrEqual,
        Comparator::LessOrEqual,
        Comparator::Compatible,
        Comparator::Greater,
        Comparator::Less,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::Compatible => "~=",
            Comparator::Arbitrary => "===",
        }
    }

    /// Split a leading operator off `text`.
    pub fn split_prefix(text: &str) -> Option<(Comparator, &str)> {
        Self::ALL.into_iter().find_map(|op| text.strip_prefix(op.symbol()).map(|rest| (op, rest)))
    }

    fn allows_wildcard(&self) -> bool {
        matches!(self, Comparator::Equal | Comparator::NotEqual)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One `(comparator, version)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub comparator: Comparator,
    pub version: Version,
    /// `==1.0.*` / `!=1.0.*` prefix match.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub wildcard: bool,
}

impl Clause {
    /// Whether `candidate` satisfies this clause.
    pub fn allows(&self, candidate: &Version) -> bool {
        let target = &self.version;
        match self.comparator {
            Comparator::Equal if self.wildcard => {
                candidate.has_release_prefix(target.epoch(), target.release())
            }
            Comparator::NotEqual if self.wildcard => {
                !candidate.has_release_prefix(target.epoch(), target.release())
            }
            Comparator::Equal => candidate == target,
            Comparator::NotEqual => candidate != target,
            Comparator::GreaterOrEqual => candidate >= target,
            Comparator::LessOrEqual => candidate <= target,
            Comparator::Greater => candidate > target,
            Comparator::Less => candidate < target,
            Comparator::Compatible => {
                candidate >= target
                    && candidate.has_release_prefix(target.epoch(), self.compatible_prefix())
            }
            Comparator::Arbitrary => candidate.as_str() == target.as_str(),
        }
    }

    /// Release prefix that a `~=` clause keeps fixed.
    pub(crate) fn compatible_prefix(&self) -> &[u64] {
        let release = self.version.release();
        &release[..release.len().saturating_sub(1)]
    }
}

impl FromStr for Clause {
    type Err = String;

    /// Parse `<op><version>[.*]`; the error is a human-readable reason.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err("empty version clause".to_string());
        }

        let (comparator, rest) = Comparator::split_prefix(text).ok_or_else(|| {
            let op: String = text.chars().take_while(|c| "=!<>~".contains(*c)).collect();
            if op.is_empty() {
                format!("expected a comparator before '{}'", text)
            } else {
                format!("unknown comparator '{}'", op)
            }
        })?;

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(format!("missing version after '{}'", comparator));
        }

        let (literal, wildcard) = match rest.strip_suffix(".*") {
            Some(prefix) => (prefix, true),
            None => (rest, false),
        };
        if wildcard && !comparator.allows_wildcard() {
            return Err(format!("wildcard is not allowed with '{}'", comparator));
        }

        let version: Version = literal.parse().map_err(|e: AppError| e.to_string())?;
        if wildcard && !version.is_plain_release() {
            return Err(format!("wildcard must follow a plain release, got '{}'", literal));
        }
        if comparator == Comparator::Compatible && version.release().len() < 2 {
            return Err(format!("'~=' needs at least two release components, got '{}'", literal));
        }

        Ok(Self { comparator, version, wildcard })
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)?;
        if self.wildcard {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

/// Ordered clause list; a candidate must satisfy every clause.
///
/// An empty constraint leaves the package unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionConstraint {
    clauses: Vec<Clause>,
}

impl VersionConstraint {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn allows(&self, candidate: &Version) -> bool {
        self.clauses.iter().all(|clause| clause.allows(candidate))
    }

    /// Clauses that reject `candidate`, in declared order.
    pub fn rejecting(&self, candidate: &Version) -> Vec<&Clause> {
        self.clauses.iter().filter(|clause| !clause.allows(candidate)).collect()
    }
}

impl FromStr for VersionConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let clauses = s.split(',').map(str::parse).collect::<Result<Vec<Clause>, _>>()?;
        Ok(Self { clauses })
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.clauses.iter().map(Clause::to_string).collect::<Vec<_>>().join(",");
        f.write_str(&rendered)
    }
}
