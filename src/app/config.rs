//! Configuration loading and manifest path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::{CONFIG_FILE, DEFAULT_MANIFEST, MANIFEST_ENV, parse_config_content};
use crate::domain::{AppError, ReqfileConfig};

/// Load `reqfile.toml` from `root`; a missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<ReqfileConfig, AppError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.is_file() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(ReqfileConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    debug!(path = %config_path.display(), "loaded config");
    parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(e) => {
            AppError::config_error(format!("{}: {}", config_path.display(), e))
        }
        other => other,
    })
}

/// Manifest path, by precedence: explicit flag, environment, config, default.
pub fn resolve_manifest_path(explicit: Option<&Path>, config: &ReqfileConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(MANIFEST_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.manifest.path {
        return path.clone();
    }
    PathBuf::from(DEFAULT_MANIFEST)
}
