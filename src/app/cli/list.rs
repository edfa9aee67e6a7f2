//! List command implementation.

use std::path::Path;

use crate::app::api::{self, ListFormat};
use crate::domain::AppError;

pub fn run_list(file: Option<&Path>, format: ListFormat) -> Result<(), AppError> {
    let output = api::list(file)?;
    print!("{}", output.render(format)?);
    Ok(())
}
