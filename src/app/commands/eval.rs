//! Eval command - tests a candidate version against a declared constraint.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::domain::{AppError, Manifest, Version};
use crate::ports::ManifestStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// Clauses the candidate fails, in declared order.
    Rejected { failing: Vec<String> },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvalOutcome {
    /// Package name as declared in the manifest.
    pub name: String,
    pub constraint: String,
    pub version: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Evaluate `version` against the constraint declared for `name`.
pub fn evaluate(
    manifest: &Manifest,
    manifest_label: &str,
    name: &str,
    version: &Version,
) -> Result<EvalOutcome, AppError> {
    let entry = manifest.find(name).ok_or_else(|| AppError::PackageNotDeclared {
        name: name.to_string(),
        manifest: manifest_label.to_string(),
    })?;

    let failing: Vec<String> =
        entry.constraint.rejecting(version).into_iter().map(ToString::to_string).collect();
    debug!(package = %entry.name, %version, failing = failing.len(), "evaluated constraint");

    let verdict = if failing.is_empty() { Verdict::Accepted } else { Verdict::Rejected { failing } };
    Ok(EvalOutcome {
        name: entry.name.to_string(),
        constraint: entry.constraint.to_string(),
        version: version.to_string(),
        verdict,
    })
}

pub fn execute<S: ManifestStore>(
    store: &S,
    path: &Path,
    name: &str,
    version: &str,
) -> Result<EvalOutcome, AppError> {
    let version: Version = version.parse()?;
    let manifest = super::load_manifest(store, path)?;
    evaluate(&manifest, &path.display().to_string(), name, &version)
}
