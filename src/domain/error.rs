use std::io;

use thiserror::Error;

/// Library-wide error type for reqfile operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A manifest line could not be parsed.
    #[error("Line {line}: {reason} in '{text}'")]
    Parse { line: usize, text: String, reason: String },

    /// Package name is invalid.
    #[error(
        "Invalid package name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidPackageName(String),

    /// Template identifier is invalid.
    #[error("Invalid template name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidTemplateName(String),

    /// Version literal is invalid.
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    /// Package is not declared in the manifest.
    #[error("Package '{name}' is not declared in {manifest}")]
    PackageNotDeclared { name: String, manifest: String },

    /// Manifest file missing.
    #[error("Manifest not found: {0}")]
    ManifestNotFound(String),

    /// Manifest already exists at the target location.
    #[error("Manifest already exists: {0} (use --force to overwrite)")]
    ManifestExists(String),

    /// Template not found in catalog.
    #[error("Template '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// Embedded template metadata is invalid.
    #[error("Invalid metadata for template '{template}': {reason}")]
    InvalidTemplateMetadata { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error(line: usize, text: &str, reason: impl Into<String>) -> Self {
        AppError::Parse { line, text: text.to_string(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Parse { .. }
            | AppError::InvalidPackageName(_)
            | AppError::InvalidTemplateName(_)
            | AppError::InvalidVersion(_)
            | AppError::InvalidTemplateMetadata { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::PackageNotDeclared { .. }
            | AppError::ManifestNotFound(_)
            | AppError::TemplateNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ManifestExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}
