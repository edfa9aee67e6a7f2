//! Package version literals and their ordering.
//!
//! Accepts `[N!]N(.N)*[{a|b|rc}N][.postN][.devN]` plus the usual alternate
//! spellings (`alpha`, `beta`, `c`, `pre`, `preview`, `rev`, `r`), optional
//! `-`/`_`/`.` separators before suffixes, and a leading `v`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// Pre-release phase, ordered alpha < beta < release candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreRelease {
    Alpha,
    Beta,
    Candidate,
}

/// A parsed version literal.
///
/// Displays exactly as written; compares by parsed value, so `1.0 == 1.0.0`.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct Version {
    text: String,
    epoch: u64,
    release: Vec<u64>,
    pre: Option<(PreRelease, u64)>,
    post: Option<u64>,
    dev: Option<u64>,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    DevOnly,
    Pre(PreRelease, u64),
    Final,
}

impl Version {
    /// Original text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Release components as written (no zero padding).
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// No pre, post, or dev suffix.
    pub fn is_plain_release(&self) -> bool {
        self.pre.is_none() && self.post.is_none() && self.dev.is_none()
    }

    /// Smallest version whose release starts with `prefix`.
    pub(crate) fn prefix_floor(epoch: u64, prefix: &[u64]) -> Self {
        Self::synthetic(epoch, prefix.to_vec())
    }

    /// Smallest version past every release starting with `prefix`.
    ///
    /// Components at `u64::MAX` carry into the one before them, then into the
    /// epoch. `None` when nothing lies past the prefix.
    pub(crate) fn prefix_ceiling(epoch: u64, prefix: &[u64]) -> Option<Self> {
        let mut release = prefix.to_vec();
        while let Some(last) = release.pop() {
            if let Some(bumped) = last.checked_add(1) {
                release.push(bumped);
                return Some(Self::synthetic(epoch, release));
            }
        }
        epoch.checked_add(1).map(|next| Self::synthetic(next, vec![0]))
    }

    fn synthetic(epoch: u64, release: Vec<u64>) -> Self {
        let numbers = release.iter().map(u64::to_string).collect::<Vec<_>>().join(".");
        let text = if epoch > 0 {
            format!("{}!{}.dev0", epoch, numbers)
        } else {
            format!("{}.dev0", numbers)
        };
        Self { text, epoch, release, pre: None, post: None, dev: Some(0) }
    }

    /// Whether this version's release begins with `prefix` (zero padded) in the same epoch.
    pub fn has_release_prefix(&self, epoch: u64, prefix: &[u64]) -> bool {
        if self.epoch != epoch {
            return false;
        }
        prefix
            .iter()
            .enumerate()
            .all(|(i, expected)| self.release.get(i).copied().unwrap_or(0) == *expected)
    }

    fn trimmed_release(&self) -> &[u64] {
        let end = self.release.iter().rposition(|n| *n != 0).map_or(0, |i| i + 1);
        &self.release[..end]
    }

    fn stage(&self) -> Stage {
        match (self.pre, self.post, self.dev) {
            (Some((phase, n)), _, _) => Stage::Pre(phase, n),
            (None, None, Some(_)) => Stage::DevOnly,
            _ => Stage::Final,
        }
    }

    fn dev_key(&self) -> (bool, u64) {
        match self.dev {
            Some(n) => (false, n),
            None => (true, 0),
        }
    }
}

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || AppError::InvalidVersion(text.to_string());
        if text.is_empty() {
            return Err(invalid());
        }

        let lowered = text.to_ascii_lowercase();
        let body = lowered.strip_prefix('v').unwrap_or(&lowered);

        let (epoch, body) = match body.split_once('!') {
            Some((epoch, rest)) => (parse_number(epoch).ok_or_else(invalid)?, rest),
            None => (0, body),
        };

        let release_end =
            body.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(body.len());
        let (mut release_text, suffix) = body.split_at(release_end);
        if !suffix.is_empty() {
            release_text = release_text.strip_suffix('.').unwrap_or(release_text);
        }

        let release = release_text
            .split('.')
            .map(parse_number)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let (pre, post, dev) = parse_suffixes(suffix).ok_or_else(invalid)?;

        Ok(Self { text: text.to_string(), epoch, release, pre, post, dev })
    }
}

fn parse_number(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

type Suffixes = (Option<(PreRelease, u64)>, Option<u64>, Option<u64>);

const PRE_SPELLINGS: [(&str, PreRelease); 8] = [
    ("alpha", PreRelease::Alpha),
    ("a", PreRelease::Alpha),
    ("beta", PreRelease::Beta),
    ("b", PreRelease::Beta),
    ("preview", PreRelease::Candidate),
    ("pre", PreRelease::Candidate),
    ("rc", PreRelease::Candidate),
    ("c", PreRelease::Candidate),
];

const POST_SPELLINGS: [&str; 3] = ["post", "rev", "r"];

/// Parse `[sep]pre[N][sep]post[N][sep]dev[N]`, each part optional, in that order.
fn parse_suffixes(mut rest: &str) -> Option<Suffixes> {
    let mut pre = None;
    let mut post = None;
    let mut dev = None;
    // 0 = expecting pre, 1 = expecting post, 2 = expecting dev, 3 = done
    let mut slot = 0;

    while !rest.is_empty() {
        rest = rest.strip_prefix(['-', '_', '.']).unwrap_or(rest);

        let pre_match = PRE_SPELLINGS
            .iter()
            .find_map(|(word, phase)| rest.strip_prefix(word).map(|tail| (*phase, tail)));
        let post_match = POST_SPELLINGS.iter().find_map(|word| rest.strip_prefix(word));
        let dev_match = rest.strip_prefix("dev");

        match (pre_match, post_match, dev_match) {
            (Some((phase, tail)), _, _) if slot == 0 => {
                let (n, tail) = take_number(tail)?;
                pre = Some((phase, n));
                rest = tail;
                slot = 1;
            }
            (_, Some(tail), _) if slot <= 1 => {
                let (n, tail) = take_number(tail)?;
                post = Some(n);
                rest = tail;
                slot = 2;
            }
            (_, _, Some(tail)) if slot <= 2 => {
                let (n, tail) = take_number(tail)?;
                dev = Some(n);
                rest = tail;
                slot = 3;
            }
            _ => return None,
        }
    }

    Some((pre, post, dev))
}

/// Optional separator followed by an optional number (implicit 0).
fn take_number(rest: &str) -> Option<(u64, &str)> {
    let unsep = rest.strip_prefix(['-', '_', '.']).unwrap_or(rest);
    let digits_end = unsep.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsep.len());
    if digits_end == 0 {
        // A bare separator with nothing numeric after it belongs to the next suffix.
        return Some((0, rest));
    }
    let n = unsep[..digits_end].parse().ok()?;
    Some((n, &unsep[digits_end..]))
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.trimmed_release().cmp(other.trimmed_release()))
            .then_with(|| self.stage().cmp(&other.stage()))
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| self.dev_key().cmp(&other.dev_key()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
        self.trimmed_release().hash(state);
        self.stage().hash_into(state);
        self.post.hash(state);
        self.dev_key().hash(state);
    }
}

impl Stage {
    fn hash_into<H: Hasher>(&self, state: &mut H) {
        match self {
            Stage::DevOnly => 0u8.hash(state),
            Stage::Pre(phase, n) => {
                1u8.hash(state);
                phase.hash(state);
                n.hash(state);
            }
            Stage::Final => 2u8.hash(state),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.text
    }
}
