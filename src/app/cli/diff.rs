//! Diff command implementation.

use std::path::Path;

use crate::app::api;
use crate::app::commands::diff::describe;
use crate::domain::AppError;

pub fn run_diff(old: &Path, new: &Path, deny_reorder: bool) -> Result<i32, AppError> {
    let diff = api::diff(old, new)?;

    if diff.is_empty() {
        println!("No changes.");
        return Ok(0);
    }
    for change in &diff.changes {
        println!("{}", describe(change));
    }

    if diff.order_changing {
        eprintln!("⚠️  Install order of existing entries changed");
        if deny_reorder {
            return Ok(1);
        }
    }
    Ok(0)
}
