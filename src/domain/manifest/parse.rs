//! Line-oriented manifest parser.
//!
//! `<name>[<op><version>[,<op><version>...]]  [# comment]`, one entry per line.

use tracing::debug;

use super::{DependencyEntry, Line, Manifest};
use crate::domain::{AppError, PackageName, VersionConstraint};

/// Parse manifest text. Errors carry the 1-based line number.
pub fn parse_manifest(content: &str) -> Result<Manifest, AppError> {
    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        lines.push(parse_line(index + 1, raw)?);
    }
    let manifest = Manifest::from_lines(lines);
    debug!(entries = manifest.len(), "parsed manifest");
    Ok(manifest)
}

fn parse_line(number: usize, raw: &str) -> Result<Line, AppError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Line::Blank);
    }
    if text.starts_with('#') {
        return Ok(Line::Comment(text.to_string()));
    }
    if text.starts_with('-') {
        return Err(AppError::parse_error(number, text, "installer directives are not supported"));
    }

    let (requirement, annotation) = match text.split_once('#') {
        Some((requirement, note)) => (requirement.trim(), Some(note.trim().to_string())),
        None => (text, None),
    };

    let name_end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(requirement.len());
    let (name, rest) = requirement.split_at(name_end);
    if name.is_empty() {
        return Err(AppError::parse_error(number, text, "expected a package name"));
    }
    let name = PackageName::new(name).map_err(|_| {
        AppError::parse_error(number, text, format!("invalid package name '{}'", name))
    })?;

    let rest = rest.trim();
    let unsupported = match rest.chars().next() {
        Some('[') => Some("extras are not supported"),
        Some(';') => Some("environment markers are not supported"),
        Some('@') => Some("direct references are not supported"),
        _ => None,
    };
    if let Some(reason) = unsupported {
        return Err(AppError::parse_error(number, text, reason));
    }

    let constraint: VersionConstraint =
        rest.parse().map_err(|reason: String| AppError::parse_error(number, text, reason))?;

    Ok(Line::Entry(DependencyEntry { name, constraint, position: 0, annotation }))
}
