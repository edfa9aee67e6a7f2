//! Template catalog service - loads manifest templates from embedded assets.

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, ManifestTemplate, TemplateId, parse_manifest};
use crate::ports::TemplateCatalog;

/// Embedded template directory.
static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Metadata parsed from meta.toml.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateMeta {
    /// Template name (defaults to directory name if missing).
    name: Option<String>,
    /// Short summary.
    #[serde(default)]
    summary: String,
}

/// Catalog of manifest templates compiled into the binary.
pub struct EmbeddedTemplateCatalog {
    templates: BTreeMap<String, ManifestTemplate>,
}

impl EmbeddedTemplateCatalog {
    /// Create a new catalog by loading all embedded templates.
    pub fn new() -> Result<Self, AppError> {
        let mut templates = BTreeMap::new();

        for entry in TEMPLATE_DIR.dirs() {
            let dir_name = entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("");
            let invalid = |reason: String| AppError::InvalidTemplateMetadata {
                template: dir_name.to_string(),
                reason,
            };

            let meta_file = entry.get_file(entry.path().join("meta.toml"));
            let manifest_file = entry.get_file(entry.path().join("requirements.txt"));

            let (Some(meta_file), Some(manifest_file)) = (meta_file, manifest_file) else {
                continue;
            };

            let meta_content = meta_file
                .contents_utf8()
                .ok_or_else(|| invalid("meta.toml is not valid UTF-8".to_string()))?;
            let content = manifest_file
                .contents_utf8()
                .ok_or_else(|| invalid("requirements.txt is not valid UTF-8".to_string()))?;

            let meta: TemplateMeta =
                toml::from_str(meta_content).map_err(|e| invalid(e.to_string()))?;

            let name = meta.name.unwrap_or_else(|| dir_name.to_string());
            let id = TemplateId::new(&name)
                .map_err(|_| invalid(format!("Invalid template name '{}'", name)))?;

            parse_manifest(content).map_err(|e| invalid(e.to_string()))?;

            let template = ManifestTemplate { id, summary: meta.summary, content: content.to_string() };
            templates.insert(name, template);
        }

        Ok(Self { templates })
    }
}

impl TemplateCatalog for EmbeddedTemplateCatalog {
    fn get(&self, name: &str) -> Option<&ManifestTemplate> {
        self.templates.get(name)
    }

    fn list_all(&self) -> Vec<&ManifestTemplate> {
        self.templates.values().collect()
    }

    fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}
