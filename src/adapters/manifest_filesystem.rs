use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ManifestStore;

/// Filesystem-based manifest store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemManifestStore {
    root: PathBuf,
}

impl FilesystemManifestStore {
    /// Create a manifest store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ManifestStore for FilesystemManifestStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_manifest(&self, path: &Path) -> Result<String, AppError> {
        let full = self.resolve(path);
        if !full.is_file() {
            return Err(AppError::ManifestNotFound(path.display().to_string()));
        }
        debug!(path = %full.display(), "reading manifest");
        Ok(fs::read_to_string(full)?)
    }

    fn write_manifest(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %full.display(), bytes = content.len(), "writing manifest");
        fs::write(full, content)?;
        Ok(())
    }
}
