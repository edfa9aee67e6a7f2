use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ManifestStore;

/// In-memory manifest store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryManifestStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a manifest at `path`.
    pub fn insert(&self, path: &Path, content: &str) {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
    }

    /// Current content at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl ManifestStore for MemoryManifestStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_manifest(&self, path: &Path) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| AppError::ManifestNotFound(path.display().to_string()))
    }

    fn write_manifest(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.insert(path, content);
        Ok(())
    }
}
