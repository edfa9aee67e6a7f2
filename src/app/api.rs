//! API Facade for the application.
//!
//! Each operation has a current-directory form and an `_at` form rooted at an
//! explicit project directory. Manifest paths are resolved against the root
//! with `--file` > `REQFILE_MANIFEST` > `reqfile.toml` > `requirements.txt`.

use std::path::{Path, PathBuf};

use crate::adapters::assets::template_catalog_embedded::EmbeddedTemplateCatalog;
use crate::adapters::manifest_filesystem::FilesystemManifestStore;
use crate::app::config::{load_config, resolve_manifest_path};
use crate::app::{AppContext, commands};

pub use crate::app::commands::check::{CheckOptions, CheckOutcome, Diagnostic, Severity};
pub use crate::app::commands::eval::{EvalOutcome, Verdict};
pub use crate::app::commands::fmt::{FmtOptions, FmtOutcome};
pub use crate::app::commands::init::{DEFAULT_TEMPLATE, InitOutcome};
pub use crate::app::commands::list::{ListFormat, ListOutput};
pub use crate::app::commands::templates::TemplateSummary;
pub use crate::domain::{AppError, Change, ManifestDiff};

/// Create an `AppContext` for a given path.
fn create_context(
    root: PathBuf,
) -> Result<AppContext<FilesystemManifestStore, EmbeddedTemplateCatalog>, AppError> {
    Ok(AppContext::new(FilesystemManifestStore::new(root), EmbeddedTemplateCatalog::new()?))
}

fn manifest_path(root: &Path, explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    let config = load_config(root)?;
    Ok(resolve_manifest_path(explicit, &config))
}

// =============================================================================
// Init / Templates
// =============================================================================

/// Write a bundled template to the manifest path in the current directory.
pub fn init(
    manifest: Option<&Path>,
    template: Option<&str>,
    force: bool,
) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, manifest, template, force)
}

/// Write a bundled template to the manifest path under `root`.
pub fn init_at(
    root: impl Into<PathBuf>,
    manifest: Option<&Path>,
    template: Option<&str>,
    force: bool,
) -> Result<InitOutcome, AppError> {
    let root = root.into();
    let path = manifest_path(&root, manifest)?;
    let ctx = create_context(root)?;
    commands::init::execute(&ctx, &path, template, force)
}

/// List the bundled templates.
pub fn templates() -> Result<Vec<TemplateSummary>, AppError> {
    let catalog = EmbeddedTemplateCatalog::new()?;
    commands::templates::execute(&catalog)
}

// =============================================================================
// Inspection
// =============================================================================

/// List entries of the manifest in the current directory.
pub fn list(manifest: Option<&Path>) -> Result<ListOutput, AppError> {
    list_at(std::env::current_dir()?, manifest)
}

pub fn list_at(root: impl Into<PathBuf>, manifest: Option<&Path>) -> Result<ListOutput, AppError> {
    let root = root.into();
    let path = manifest_path(&root, manifest)?;
    commands::list::execute(&FilesystemManifestStore::new(root), &path)
}

/// Lint the manifest in the current directory.
pub fn check(manifest: Option<&Path>, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check_at(std::env::current_dir()?, manifest, options)
}

pub fn check_at(
    root: impl Into<PathBuf>,
    manifest: Option<&Path>,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let root = root.into();
    let config = load_config(&root)?;
    let path = resolve_manifest_path(manifest, &config);
    commands::check::execute(&FilesystemManifestStore::new(root), &path, &config, options)
}

/// Evaluate a candidate version against a declared constraint.
pub fn eval(manifest: Option<&Path>, name: &str, version: &str) -> Result<EvalOutcome, AppError> {
    eval_at(std::env::current_dir()?, manifest, name, version)
}

pub fn eval_at(
    root: impl Into<PathBuf>,
    manifest: Option<&Path>,
    name: &str,
    version: &str,
) -> Result<EvalOutcome, AppError> {
    let root = root.into();
    let path = manifest_path(&root, manifest)?;
    commands::eval::execute(&FilesystemManifestStore::new(root), &path, name, version)
}

// =============================================================================
// Rewriting / Comparison
// =============================================================================

/// Canonicalize the manifest in the current directory.
pub fn fmt(manifest: Option<&Path>, options: FmtOptions) -> Result<FmtOutcome, AppError> {
    fmt_at(std::env::current_dir()?, manifest, options)
}

pub fn fmt_at(
    root: impl Into<PathBuf>,
    manifest: Option<&Path>,
    options: FmtOptions,
) -> Result<FmtOutcome, AppError> {
    let root = root.into();
    let path = manifest_path(&root, manifest)?;
    commands::fmt::execute(&FilesystemManifestStore::new(root), &path, options)
}

/// Compare two manifest files, relative to the current directory.
pub fn diff(old: &Path, new: &Path) -> Result<ManifestDiff, AppError> {
    diff_at(std::env::current_dir()?, old, new)
}

pub fn diff_at(root: impl Into<PathBuf>, old: &Path, new: &Path) -> Result<ManifestDiff, AppError> {
    commands::diff::execute(&FilesystemManifestStore::new(root.into()), old, new)
}
