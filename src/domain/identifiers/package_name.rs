//! Package name as declared in a manifest.

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_package_name;
use crate::impl_validated_id;

/// A validated package name.
///
/// Keeps the spelling as written. Equality here is spelling equality; use
/// [`PackageName::canonical`] to decide whether two names denote the same package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl_validated_id!(PackageName, validate_package_name, AppError::InvalidPackageName);

impl PackageName {
    /// Normalized form: lowercase, with every run of `-`, `_`, `.` collapsed to `-`.
    pub fn canonical(&self) -> String {
        canonicalize(&self.0)
    }

    /// Whether `other` names the same package, ignoring case and separator spelling.
    pub fn matches(&self, other: &str) -> bool {
        self.canonical() == canonicalize(other)
    }
}

pub(crate) fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                out.push('-');
            }
            in_separator = true;
        } else {
            out.push(c.to_ascii_lowercase());
            in_separator = false;
        }
    }
    out
}
