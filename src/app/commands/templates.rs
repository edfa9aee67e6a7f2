//! Templates command - lists bundled manifest templates.

use serde::Serialize;

use crate::domain::AppError;
use crate::ports::TemplateCatalog;

/// Summary information for a template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub summary: String,
    pub entries: usize,
}

pub fn execute<T: TemplateCatalog>(catalog: &T) -> Result<Vec<TemplateSummary>, AppError> {
    catalog
        .list_all()
        .into_iter()
        .map(|template| {
            Ok(TemplateSummary {
                name: template.id.to_string(),
                summary: template.summary.clone(),
                entries: template.manifest()?.len(),
            })
        })
        .collect()
}
