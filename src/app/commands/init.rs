//! Init command - writes a bundled template to the manifest path.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ManifestStore, TemplateCatalog};

/// Template written when none is requested.
pub const DEFAULT_TEMPLATE: &str = "swift-storage";

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub template: String,
    pub entries: usize,
    /// True when an existing manifest was replaced.
    pub overwritten: bool,
}

pub fn execute<S: ManifestStore, T: TemplateCatalog>(
    ctx: &AppContext<S, T>,
    path: &Path,
    template: Option<&str>,
    force: bool,
) -> Result<InitOutcome, AppError> {
    let name = template.unwrap_or(DEFAULT_TEMPLATE);
    let template = ctx.templates().get(name).ok_or_else(|| AppError::TemplateNotFound {
        name: name.to_string(),
        available: ctx.templates().names().join(", "),
    })?;

    let overwritten = ctx.store().exists(path);
    if overwritten && !force {
        return Err(AppError::ManifestExists(path.display().to_string()));
    }

    let manifest = template.manifest()?;
    ctx.store().write_manifest(path, &template.content)?;
    info!(path = %path.display(), template = name, overwritten, "wrote manifest");

    Ok(InitOutcome {
        path: path.to_path_buf(),
        template: name.to_string(),
        entries: manifest.len(),
        overwritten,
    })
}
