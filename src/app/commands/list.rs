//! List command - entries in declared order plus the manifest fingerprint.

use std::path::Path;

use serde::Serialize;

use crate::domain::{AppError, DependencyEntry};
use crate::ports::ManifestStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    pub manifest: String,
    /// SHA-256 over the ordered entries.
    pub fingerprint: String,
    pub entries: Vec<DependencyEntry>,
}

impl ListOutput {
    /// Human-readable rendering, one entry per line.
    pub fn to_text(&self) -> String {
        let width = self.entries.iter().map(|e| e.name.as_str().len()).max().unwrap_or(0);
        let mut out = String::new();
        for entry in &self.entries {
            let constraint = if entry.constraint.is_unconstrained() {
                "*".to_string()
            } else {
                entry.constraint.to_string()
            };
            let line = match &entry.annotation {
                Some(note) if !note.is_empty() => format!(
                    "{:>3}  {:<width$}  {}  # {}",
                    entry.position, entry.name.as_str(), constraint, note
                ),
                _ => {
                    format!("{:>3}  {:<width$}  {}", entry.position, entry.name.as_str(), constraint)
                }
            };
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push_str(&format!("fingerprint: {}\n", self.fingerprint));
        out
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ListFormat) -> Result<String, AppError> {
        match format {
            ListFormat::Text => Ok(self.to_text()),
            ListFormat::Json => self.to_json().map(|json| json + "\n"),
        }
    }
}

pub fn execute<S: ManifestStore>(store: &S, path: &Path) -> Result<ListOutput, AppError> {
    let manifest = super::load_manifest(store, path)?;
    Ok(ListOutput {
        manifest: path.display().to_string(),
        fingerprint: manifest.fingerprint(),
        entries: manifest.entries().cloned().collect(),
    })
}
