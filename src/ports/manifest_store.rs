//! Manifest storage port definition.

use std::path::Path;

use crate::domain::AppError;

/// Access to manifest text, addressed by paths relative to the store root.
pub trait ManifestStore {
    fn exists(&self, path: &Path) -> bool;

    /// Read the raw manifest text. Fails with `ManifestNotFound` when absent.
    fn read_manifest(&self, path: &Path) -> Result<String, AppError>;

    /// Write manifest text, creating parent directories as needed.
    fn write_manifest(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
