//! Directory scaffolder: server tree plus template copies.

use tracing::{debug, info};

use super::ResolvedServer;
use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, ScaffoldPlan, ScaffoldReport};
use crate::ports::RepositoryFilesystem;

/// Create the server directory tree and copy the type's template files into it.
///
/// Every template source is checked before anything is created. Existing
/// directories are left alone; destination files that already exist are kept
/// and reported as skipped.
pub(super) fn scaffold<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    server: &ResolvedServer,
) -> Result<ScaffoldReport, AppError> {
    let fs = ctx.filesystem();
    let plan = ScaffoldPlan::new(
        &paths::server_dir(ctx.config(), server.name.as_str()),
        &paths::template_dir(ctx.config(), &server.descriptor.template_path),
        &server.descriptor,
    );

    if let Some(missing) =
        plan.copies.iter().find(|copy| !fs.file_exists(&copy.source) || fs.is_dir(&copy.source))
    {
        return Err(AppError::TemplateFileMissing {
            server_type: server.type_name.clone(),
            path: missing.source.clone(),
        });
    }

    let mut report = ScaffoldReport { server_dir: plan.server_dir.clone(), ..ScaffoldReport::default() };
    for dir in plan.directories {
        if !fs.is_dir(&dir) {
            fs.create_dir_all(&dir)?;
            report.created_directories.push(dir);
        }
    }
    for copy in plan.copies {
        if fs.file_exists(&copy.destination) {
            debug!(path = %copy.destination, "keeping existing file");
            report.skipped.push(copy.destination);
        } else {
            fs.copy_file(&copy.source, &copy.destination)?;
            report.copied.push(copy.destination);
        }
    }

    info!(
        server_dir = %report.server_dir,
        created = report.created_directories.len(),
        copied = report.copied.len(),
        skipped = report.skipped.len(),
        "server directory scaffolded"
    );
    Ok(report)
}
