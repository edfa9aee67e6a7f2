use std::collections::HashMap;

use crate::domain::{LintSection, Manifest};

use super::diagnostics::Diagnostics;

pub fn entry_checks(manifest: &Manifest, lint: &LintSection, diagnostics: &mut Diagnostics) {
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (line, entry) in manifest.numbered_entries() {
        let key = entry.name.canonical();
        if let Some(previous) = first_seen.get(&key) {
            diagnostics.push_error(
                line,
                entry.name.as_str(),
                format!("duplicate package, first declared on line {}", previous),
            );
        } else {
            first_seen.insert(key, line);
        }

        if entry.constraint.is_unconstrained() && !lint.allows_unconstrained(&entry.name) {
            diagnostics.push_warning(line, entry.name.as_str(), "no version constraint");
        }
    }
}
