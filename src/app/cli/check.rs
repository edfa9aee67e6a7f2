//! Check command implementation.

use std::path::Path;

use crate::app::api::{self, CheckOptions};
use crate::domain::AppError;

pub fn run_check(file: Option<&Path>, strict: bool) -> Result<i32, AppError> {
    let outcome = api::check(file, CheckOptions { strict })?;

    Ok(outcome.exit_code)
}
