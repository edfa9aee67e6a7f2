use crate::domain::{Clause, Comparator, Manifest, Version, VersionConstraint};

use super::diagnostics::Diagnostics;

pub fn constraint_checks(manifest: &Manifest, diagnostics: &mut Diagnostics) {
    for (line, entry) in manifest.numbered_entries() {
        let analysis = analyze(&entry.constraint);
        if !analysis.satisfiable {
            diagnostics.push_error(
                line,
                entry.name.as_str(),
                format!("constraint '{}' cannot be satisfied by any version", entry.constraint),
            );
            continue;
        }
        for clause in analysis.redundant {
            diagnostics.push_warning(
                line,
                entry.name.as_str(),
                format!("'{}' excludes a version the other clauses already reject", clause),
            );
        }
    }
}

/// Endpoint of the allowed interval; `true` when inclusive.
type Bound = (Version, bool);

struct Analysis<'a> {
    satisfiable: bool,
    redundant: Vec<&'a Clause>,
}

fn analyze(constraint: &VersionConstraint) -> Analysis<'_> {
    let mut lower: Option<Bound> = None;
    let mut upper: Option<Bound> = None;
    let mut pins = Vec::new();
    let mut exclusions = Vec::new();
    let mut excluded_prefixes = Vec::new();

    for clause in constraint.clauses() {
        let version = &clause.version;
        match (clause.comparator, clause.wildcard) {
            (Comparator::Equal, true) => {
                let prefix = version.release();
                raise(&mut lower, (Version::prefix_floor(version.epoch(), prefix), true));
                if let Some(ceiling) = Version::prefix_ceiling(version.epoch(), prefix) {
                    cap(&mut upper, (ceiling, false));
                }
            }
            (Comparator::Equal, false) | (Comparator::Arbitrary, _) => pins.push(clause),
            (Comparator::NotEqual, false) => exclusions.push(clause),
            (Comparator::NotEqual, true) => {
                let prefix = version.release();
                excluded_prefixes.push(PrefixRange {
                    floor: Version::prefix_floor(version.epoch(), prefix),
                    ceiling: Version::prefix_ceiling(version.epoch(), prefix),
                });
            }
            (Comparator::GreaterOrEqual, _) => raise(&mut lower, (version.clone(), true)),
            (Comparator::Greater, _) => raise(&mut lower, (version.clone(), false)),
            (Comparator::LessOrEqual, _) => cap(&mut upper, (version.clone(), true)),
            (Comparator::Less, _) => cap(&mut upper, (version.clone(), false)),
            (Comparator::Compatible, _) => {
                raise(&mut lower, (version.clone(), true));
                if let Some(ceiling) =
                    Version::prefix_ceiling(version.epoch(), clause.compatible_prefix())
                {
                    cap(&mut upper, (ceiling, false));
                }
            }
        }
    }

    let satisfiable = if pins.is_empty() {
        skip_excluded_prefixes(&mut lower, &excluded_prefixes)
            && interval_is_inhabited(&lower, &upper, &exclusions)
    } else {
        pins.iter().any(|pin| constraint.allows(&pin.version))
    };
    if !satisfiable {
        return Analysis { satisfiable, redundant: Vec::new() };
    }

    let redundant = exclusions
        .into_iter()
        .filter(|clause| {
            let excluded = &clause.version;
            let pinned_elsewhere = pins.iter().any(|pin| pin.version != *excluded);
            pinned_elsewhere || !within(excluded, &lower, &upper)
        })
        .collect();

    Analysis { satisfiable, redundant }
}

/// Versions from `floor` up to, but excluding, `ceiling`; an open range when
/// `ceiling` is `None`.
struct PrefixRange {
    floor: Version,
    ceiling: Option<Version>,
}

impl PrefixRange {
    fn contains(&self, version: &Version) -> bool {
        *version >= self.floor && self.ceiling.as_ref().is_none_or(|ceiling| version < ceiling)
    }
}

/// Move the lower bound past every excluded prefix range it starts in.
/// Returns `false` when an open range swallows everything above the bound.
fn skip_excluded_prefixes(lower: &mut Option<Bound>, ranges: &[PrefixRange]) -> bool {
    while let Some((low, _)) = lower.as_ref() {
        let Some(range) = ranges.iter().find(|range| range.contains(low)) else {
            break;
        };
        match &range.ceiling {
            Some(ceiling) => *lower = Some((ceiling.clone(), true)),
            None => return false,
        }
    }
    true
}

/// Keep the tighter lower bound; on a tie the exclusive bound is tighter.
fn raise(current: &mut Option<Bound>, candidate: Bound) {
    let tighter = match current {
        None => true,
        Some((version, inclusive)) => {
            candidate.0 > *version || (candidate.0 == *version && *inclusive && !candidate.1)
        }
    };
    if tighter {
        *current = Some(candidate);
    }
}

/// Keep the tighter upper bound; on a tie the exclusive bound is tighter.
fn cap(current: &mut Option<Bound>, candidate: Bound) {
    let tighter = match current {
        None => true,
        Some((version, inclusive)) => {
            candidate.0 < *version || (candidate.0 == *version && *inclusive && !candidate.1)
        }
    };
    if tighter {
        *current = Some(candidate);
    }
}

fn within(version: &Version, lower: &Option<Bound>, upper: &Option<Bound>) -> bool {
    let above = match lower {
        None => true,
        Some((bound, inclusive)) => version > bound || (*inclusive && version == bound),
    };
    let below = match upper {
        None => true,
        Some((bound, inclusive)) => version < bound || (*inclusive && version == bound),
    };
    above && below
}

/// Versions are dense between two distinct endpoints, so only a collapsed
/// interval can be emptied by exclusions.
fn interval_is_inhabited(
    lower: &Option<Bound>,
    upper: &Option<Bound>,
    exclusions: &[&Clause],
) -> bool {
    let (Some((low, low_inclusive)), Some((high, high_inclusive))) = (lower, upper) else {
        return true;
    };
    if low > high {
        return false;
    }
    if low == high {
        return *low_inclusive
            && *high_inclusive
            && !exclusions.iter().any(|clause| clause.version == *low);
    }
    true
}
