//! Manifest templates shipped with the binary.

use crate::domain::{AppError, Manifest, TemplateId, parse_manifest};

/// A named manifest that `init` can write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestTemplate {
    pub id: TemplateId,
    /// Short summary of what the template declares.
    pub summary: String,
    /// Manifest text, written verbatim.
    pub content: String,
}

impl ManifestTemplate {
    pub fn manifest(&self) -> Result<Manifest, AppError> {
        parse_manifest(&self.content)
    }
}
