//! Init command: install the embedded default templates.

use tracing::{debug, info};

use crate::adapters::assets::TemplateAsset;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::config::paths;
use crate::ports::RepositoryFilesystem;

/// Files written and left in place by `init`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOutcome {
    pub templates_root: String,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Write each asset under the templates root, keeping files that already exist.
pub fn execute<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    assets: &[TemplateAsset],
) -> Result<InitOutcome, AppError> {
    let templates_root = paths::templates_root(ctx.config());
    let mut outcome = InitOutcome { templates_root: templates_root.clone(), ..Default::default() };

    for asset in assets {
        let destination = format!("{}/{}", templates_root, asset.path);
        if ctx.filesystem().file_exists(&destination) {
            debug!(path = %destination, "template already present");
            outcome.skipped.push(destination);
            continue;
        }
        ctx.filesystem().write_file(&destination, &asset.content)?;
        outcome.created.push(destination);
    }

    info!(
        templates_root = %outcome.templates_root,
        created = outcome.created.len(),
        skipped = outcome.skipped.len(),
        "templates installed"
    );
    Ok(outcome)
}
