//! List command: read the inventory.

use crate::app::AppContext;
use crate::app::commands::read_document;
use crate::domain::config::paths;
use crate::domain::inventory;
use crate::domain::{AppError, ServerRecord};
use crate::ports::RepositoryFilesystem;

/// Servers recorded in the inventory, in file order. An absent inventory is empty.
pub fn execute<F: RepositoryFilesystem>(ctx: &AppContext<F>) -> Result<Vec<ServerRecord>, AppError> {
    let path = paths::inventory(ctx.config());
    let existing = read_document(ctx.filesystem(), &path, |path, details| {
        AppError::InventoryCorrupt { path, details }
    })?;
    inventory::read_records(&path, existing.as_deref())
}
