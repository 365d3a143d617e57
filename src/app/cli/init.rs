//! Init command implementation.

use crate::app::api::{self, Workspace};
use crate::domain::AppError;

pub fn run_init(workspace: &Workspace) -> Result<(), AppError> {
    let outcome = api::init_in(workspace)?;
    println!(
        "✅ Installed {} template file(s) under {}/",
        outcome.created.len(),
        outcome.templates_root
    );
    if !outcome.skipped.is_empty() {
        println!("  Kept {} existing file(s)", outcome.skipped.len());
    }
    Ok(())
}
