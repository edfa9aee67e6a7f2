//! Structural diff between two manifests.
//!
//! Entries are matched by canonical package name; a name declared more than
//! once pairs its occurrences in declared order. Relative order of the
//! retained entries is compared through their longest common subsequence:
//! retained entries outside it have moved.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::domain::{DependencyEntry, Manifest};

/// One structural change between an old and a new manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    Added { name: String, position: usize },
    Removed { name: String, position: usize },
    Moved { name: String, from: usize, to: usize },
    ConstraintChanged { name: String, old: String, new: String },
    AnnotationChanged { name: String, old: Option<String>, new: Option<String> },
}

/// Result of comparing two manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestDiff {
    pub changes: Vec<Change>,
    /// True when the edit removes, moves, or inserts an entry before the last retained one.
    pub order_changing: bool,
}

impl ManifestDiff {
    pub fn between(old: &Manifest, new: &Manifest) -> Self {
        let old_entries = keyed_entries(old);
        let new_entries = keyed_entries(new);

        let old_index: HashMap<&str, &Keyed> =
            old_entries.iter().map(|keyed| (keyed.key.as_str(), keyed)).collect();
        let new_index: HashMap<&str, &Keyed> =
            new_entries.iter().map(|keyed| (keyed.key.as_str(), keyed)).collect();

        let old_retained: Vec<&str> = old_entries
            .iter()
            .map(|keyed| keyed.key.as_str())
            .filter(|key| new_index.contains_key(key))
            .collect();
        let new_retained: Vec<&str> = new_entries
            .iter()
            .map(|keyed| keyed.key.as_str())
            .filter(|key| old_index.contains_key(key))
            .collect();
        let stable: HashSet<&str> = longest_common_subsequence(&old_retained, &new_retained);

        let mut changes = Vec::new();

        for keyed in &old_entries {
            if !new_index.contains_key(keyed.key.as_str()) {
                changes.push(Change::Removed {
                    name: keyed.entry.name.to_string(),
                    position: keyed.entry.position,
                });
            }
        }

        let last_retained = new_entries
            .iter()
            .filter(|keyed| old_index.contains_key(keyed.key.as_str()))
            .map(|keyed| keyed.entry.position)
            .max();
        let mut inserted_before_tail = false;

        for keyed in &new_entries {
            let entry = keyed.entry;
            let Some(previous) = old_index.get(keyed.key.as_str()).map(|k| k.entry) else {
                if last_retained.is_some_and(|tail| entry.position < tail) {
                    inserted_before_tail = true;
                }
                changes.push(Change::Added {
                    name: entry.name.to_string(),
                    position: entry.position,
                });
                continue;
            };

            if !stable.contains(keyed.key.as_str()) {
                changes.push(Change::Moved {
                    name: entry.name.to_string(),
                    from: previous.position,
                    to: entry.position,
                });
            }
            if previous.constraint != entry.constraint {
                changes.push(Change::ConstraintChanged {
                    name: entry.name.to_string(),
                    old: previous.constraint.to_string(),
                    new: entry.constraint.to_string(),
                });
            }
            if previous.annotation != entry.annotation {
                changes.push(Change::AnnotationChanged {
                    name: entry.name.to_string(),
                    old: previous.annotation.clone(),
                    new: entry.annotation.clone(),
                });
            }
        }

        let order_changing = inserted_before_tail
            || changes
                .iter()
                .any(|change| matches!(change, Change::Removed { .. } | Change::Moved { .. }));

        debug!(changes = changes.len(), order_changing, "computed manifest diff");
        Self { changes, order_changing }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

struct Keyed<'a> {
    /// Canonical name plus occurrence index, so repeated declarations pair up in order.
    key: String,
    entry: &'a DependencyEntry,
}

/// Entries keyed by canonical name; the k-th declaration of a name on one side
/// matches the k-th declaration on the other.
fn keyed_entries(manifest: &Manifest) -> Vec<Keyed<'_>> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    manifest
        .entries()
        .map(|entry| {
            let canonical = entry.name.canonical();
            let seen = occurrences.entry(canonical.clone()).or_default();
            let key = format!("{}#{}", canonical, seen);
            *seen += 1;
            Keyed { key, entry }
        })
        .collect()
}

fn longest_common_subsequence<'a>(left: &[&'a str], right: &[&'a str]) -> HashSet<&'a str> {
    let (n, m) = (left.len(), right.len());
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if left[i] == right[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut common = HashSet::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if left[i] == right[j] {
            common.insert(left[i]);
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    common
}
