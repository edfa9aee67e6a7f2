use crate::ports::{ManifestStore, TemplateCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ManifestStore, T: TemplateCatalog> {
    store: S,
    templates: T,
}

impl<S: ManifestStore, T: TemplateCatalog> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, templates: T) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the manifest store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template catalog.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
