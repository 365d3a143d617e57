//! The three document steps: read the target, merge, write it back.
//!
//! A step whose merge reproduces the existing content reports `Unchanged`
//! and does not write.

use tracing::info;

use super::ResolvedServer;
use crate::app::AppContext;
use crate::app::commands::read_document;
use crate::domain::compose::{self, ComposeDefaults, ServiceLayout};
use crate::domain::config::paths;
use crate::domain::inventory::{self, DuplicatePolicy, InventoryMerge};
use crate::domain::proxy_config::{self, ProxyRoute};
use crate::domain::{AppError, StepOutcome};
use crate::ports::RepositoryFilesystem;

pub(super) fn append_inventory<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    server: &ResolvedServer,
    resume: bool,
) -> Result<StepOutcome, AppError> {
    let path = paths::inventory(ctx.config());
    let existing = read_document(ctx.filesystem(), &path, |path, details| {
        AppError::InventoryCorrupt { path, details }
    })?;
    let policy = if resume { DuplicatePolicy::AllowIdentical } else { DuplicatePolicy::Reject };

    match inventory::append_server(&path, existing.as_deref(), &server.record(), policy)? {
        InventoryMerge::Appended(content) => {
            ctx.filesystem().write_file(&path, &content)?;
            info!(path = %path, server = %server.name, "inventory updated");
            Ok(StepOutcome::Written { path })
        }
        InventoryMerge::AlreadyPresent => {
            info!(path = %path, server = %server.name, "inventory already lists server");
            Ok(StepOutcome::Unchanged { path })
        }
    }
}

pub(super) fn add_proxy_route<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    server: &ResolvedServer,
) -> Result<StepOutcome, AppError> {
    let path = paths::proxy_config(ctx.config());
    let existing = read_document(ctx.filesystem(), &path, config_parse)?;
    let route = ProxyRoute {
        server_name: server.name.as_str(),
        address: &server.address,
        forced_host_domain: &ctx.config().proxy.forced_host_domain,
    };

    let content = proxy_config::add_route(&path, existing.as_deref(), &route)?;
    write_if_changed(ctx, path, existing, content)
}

pub(super) fn upsert_compose_service<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    server: &ResolvedServer,
) -> Result<StepOutcome, AppError> {
    let config = ctx.config();
    let path = paths::compose(config);
    let existing = read_document(ctx.filesystem(), &path, config_parse)?;

    let layout = ServiceLayout {
        servers_dir: &config.layout.servers_dir,
        templates_dir: &config.layout.templates_dir,
        network: &config.compose.network,
    };
    let defaults =
        ComposeDefaults { version: &config.compose.version, network: &config.compose.network };
    let service = compose::build_service(server.name.as_str(), &server.descriptor, &layout);

    let content = compose::upsert_service(
        &path,
        existing.as_deref(),
        server.name.as_str(),
        &service,
        &defaults,
    )?;
    write_if_changed(ctx, path, existing, content)
}

fn config_parse(path: String, details: String) -> AppError {
    AppError::ConfigParse { path, details }
}

fn write_if_changed<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    path: String,
    existing: Option<String>,
    content: String,
) -> Result<StepOutcome, AppError> {
    if existing.as_deref() == Some(content.as_str()) {
        info!(path = %path, "already up to date");
        return Ok(StepOutcome::Unchanged { path });
    }
    ctx.filesystem().write_file(&path, &content)?;
    info!(path = %path, "updated");
    Ok(StepOutcome::Written { path })
}
