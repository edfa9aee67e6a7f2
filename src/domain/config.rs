//! Project configuration model and parser (`reqfile.toml`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::identifiers::package_name::canonicalize;
use crate::domain::{AppError, PackageName};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "reqfile.toml";

/// Manifest used when neither the CLI, the environment, nor the config names one.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Environment variable overriding the configured manifest path.
pub const MANIFEST_ENV: &str = "REQFILE_MANIFEST";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReqfileConfig {
    #[serde(default)]
    pub manifest: ManifestSection,
    #[serde(default)]
    pub lint: LintSection,
    /// Pinned relative orderings that `check` enforces.
    #[serde(default)]
    pub order: Vec<OrderRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintSection {
    /// Packages allowed to appear without any version clause.
    #[serde(default)]
    pub allow_unconstrained: Vec<String>,
}

impl LintSection {
    pub fn allows_unconstrained(&self, name: &PackageName) -> bool {
        self.allow_unconstrained.iter().any(|allowed| name.matches(allowed))
    }
}

/// `before` must be declared ahead of `after`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRule {
    pub before: String,
    pub after: String,
}

/// Parse and validate configuration content.
pub fn parse_config_content(content: &str) -> Result<ReqfileConfig, AppError> {
    let config: ReqfileConfig = toml::from_str(content)?;

    for name in config.lint.allow_unconstrained.iter() {
        PackageName::new(name).map_err(|_| {
            AppError::config_error(format!(
                "Invalid package name '{}' in [lint].allow_unconstrained",
                name
            ))
        })?;
    }

    for rule in &config.order {
        for name in [&rule.before, &rule.after] {
            PackageName::new(name).map_err(|_| {
                AppError::config_error(format!("Invalid package name '{}' in [[order]]", name))
            })?;
        }
        if canonicalize(&rule.before) == canonicalize(&rule.after) {
            return Err(AppError::config_error(format!(
                "Order rule for '{}' must name two different packages",
                rule.before
            )));
        }
    }

    Ok(config)
}
