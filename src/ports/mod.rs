mod manifest_store;
mod template_catalog;

pub use manifest_store::ManifestStore;
pub use template_catalog::TemplateCatalog;
