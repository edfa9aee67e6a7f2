mod constraints;
mod diagnostics;
mod entries;
mod ordering;

use std::path::Path;

use tracing::info;

use crate::domain::{AppError, ReqfileConfig};
use crate::ports::ManifestStore;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn execute<S: ManifestStore>(
    store: &S,
    manifest_path: &Path,
    config: &ReqfileConfig,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let manifest = super::load_manifest(store, manifest_path)?;
    info!(path = %manifest_path.display(), entries = manifest.len(), "checking manifest");

    let mut diagnostics = Diagnostics::default();

    entries::entry_checks(&manifest, &config.lint, &mut diagnostics);
    constraints::constraint_checks(&manifest, &mut diagnostics);
    ordering::ordering_checks(&manifest, &config.order, &mut diagnostics);

    diagnostics.emit(&manifest_path.display().to_string());

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed ({} entries).", manifest.len());
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code, diagnostics: diagnostics.into_vec() })
}
