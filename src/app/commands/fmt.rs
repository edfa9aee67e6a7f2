//! Fmt command - rewrites a manifest in canonical form.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, parse_manifest};
use crate::ports::ManifestStore;

#[derive(Debug, Clone, Default)]
pub struct FmtOptions {
    /// Report only; never write.
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmtOutcome {
    pub path: PathBuf,
    /// The file differs from its canonical form.
    pub changed: bool,
    pub written: bool,
}

pub fn execute<S: ManifestStore>(
    store: &S,
    path: &Path,
    options: FmtOptions,
) -> Result<FmtOutcome, AppError> {
    let original = store.read_manifest(path)?;
    let canonical = parse_manifest(&original)?.render();
    let changed = canonical != original;

    let written = changed && !options.check;
    if written {
        store.write_manifest(path, &canonical)?;
        info!(path = %path.display(), "rewrote manifest in canonical form");
    }

    Ok(FmtOutcome { path: path.to_path_buf(), changed, written })
}
