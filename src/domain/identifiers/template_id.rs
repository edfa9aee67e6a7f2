use serde::Serialize;

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_identifier;
use crate::impl_validated_id;

/// A validated manifest template identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl_validated_id!(TemplateId, validate_identifier, AppError::InvalidTemplateName);
