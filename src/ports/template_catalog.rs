//! Manifest template catalog port definition.

use crate::domain::ManifestTemplate;

/// Trait for accessing the bundled manifest templates.
pub trait TemplateCatalog {
    /// Get a template by name.
    fn get(&self, name: &str) -> Option<&ManifestTemplate>;

    /// List all available templates sorted by name.
    fn list_all(&self) -> Vec<&ManifestTemplate>;

    /// Get all template names.
    fn names(&self) -> Vec<&str>;
}
