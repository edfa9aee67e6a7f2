pub mod check;
pub mod diff;
pub mod eval;
pub mod fmt;
pub mod init;
pub mod list;
pub mod templates;

use std::path::Path;

use crate::domain::{AppError, Manifest, parse_manifest};
use crate::ports::ManifestStore;

/// Read and parse the manifest at `path`.
pub(crate) fn load_manifest<S: ManifestStore>(store: &S, path: &Path) -> Result<Manifest, AppError> {
    let content = store.read_manifest(path)?;
    parse_manifest(&content)
}
