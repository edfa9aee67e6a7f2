//! Diff command - structural comparison of two manifests.

use std::path::Path;

use tracing::info;

use crate::domain::{AppError, Change, ManifestDiff};
use crate::ports::ManifestStore;

pub fn execute<S: ManifestStore>(
    store: &S,
    old_path: &Path,
    new_path: &Path,
) -> Result<ManifestDiff, AppError> {
    let old = super::load_manifest(store, old_path)?;
    let new = super::load_manifest(store, new_path)?;

    let diff = ManifestDiff::between(&old, &new);
    info!(
        changes = diff.changes.len(),
        order_changing = diff.order_changing,
        "compared {} with {}",
        old_path.display(),
        new_path.display()
    );
    Ok(diff)
}

/// One line per change, in the form printed by the CLI.
pub fn describe(change: &Change) -> String {
    match change {
        Change::Added { name, position } => format!("+ {} (added at {})", name, position),
        Change::Removed { name, position } => format!("- {} (removed from {})", name, position),
        Change::Moved { name, from, to } => format!("~ {} (moved {} -> {})", name, from, to),
        Change::ConstraintChanged { name, old, new } => {
            format!("* {} constraint '{}' -> '{}'", name, old, new)
        }
        Change::AnnotationChanged { name, old, new } => format!(
            "* {} annotation '{}' -> '{}'",
            name,
            old.as_deref().unwrap_or(""),
            new.as_deref().unwrap_or("")
        ),
    }
}
