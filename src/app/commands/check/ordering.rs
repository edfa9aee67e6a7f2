use crate::domain::{Manifest, OrderRule};

use super::diagnostics::Diagnostics;

pub fn ordering_checks(manifest: &Manifest, rules: &[OrderRule], diagnostics: &mut Diagnostics) {
    for rule in rules {
        let before = locate(manifest, &rule.before);
        let after = locate(manifest, &rule.after);

        match (before, after) {
            (Some((before_line, before_pos)), Some((after_line, after_pos))) => {
                if before_pos > after_pos {
                    diagnostics.push_error(
                        before_line,
                        rule.before.as_str(),
                        format!(
                            "must be declared before '{}' (line {}); install order matters",
                            rule.after, after_line
                        ),
                    );
                }
            }
            (None, None) => {
                diagnostics.push_error(
                    0,
                    format!("{}, {}", rule.before, rule.after),
                    format!(
                        "order rule '{}' before '{}' names packages that are not declared",
                        rule.before, rule.after
                    ),
                );
            }
            (before, after) => {
                let missing = if before.is_none() { &rule.before } else { &rule.after };
                let line = before.or(after).map_or(0, |(line, _)| line);
                diagnostics.push_error(
                    line,
                    missing.as_str(),
                    format!(
                        "order rule '{}' before '{}' names a package that is not declared",
                        rule.before, rule.after
                    ),
                );
            }
        }
    }
}

/// Line number and entry position of the first entry naming `name`.
fn locate(manifest: &Manifest, name: &str) -> Option<(usize, usize)> {
    manifest
        .numbered_entries()
        .find(|(_, entry)| entry.name.matches(name))
        .map(|(line, entry)| (line, entry.position))
}
