//! Add command: provision a server across the inventory, proxy config,
//! compose manifest and on-disk tree.
//!
//! Steps run once each, in the order given by `ProvisionState`. There is no
//! rollback: when a step fails, the files written by earlier steps stay on
//! disk and the error names both the failed step and the completed ones.

mod documents;
mod resolve;
mod scaffold;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, ProvisionReport, ProvisionRequest, ProvisionState, ProvisionStep, ScaffoldReport,
    StepOutcome,
};
use crate::ports::RepositoryFilesystem;

pub use resolve::ResolvedServer;

/// Provision one server.
pub fn execute<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    request: &ProvisionRequest,
) -> Result<ProvisionReport, AppError> {
    let mut state = ProvisionState::Start;

    // Resolution and name validation happen before any file is touched.
    let server = resolve::resolve(ctx.registry(), request)
        .map_err(|source| step_failed(ProvisionStep::ResolveType, state, source))?;
    debug!(server = %server.name, server_type = %server.type_name, "server type resolved");

    let mut steps = vec![(ProvisionStep::ResolveType, StepOutcome::Resolved)];
    let mut scaffold_report = ScaffoldReport::default();
    state = state.advance();

    while let Some(step) = state.pending_step() {
        debug!(step = %step, "running provisioning step");
        let outcome = match step {
            ProvisionStep::ResolveType => Ok(StepOutcome::Resolved),
            ProvisionStep::Inventory => documents::append_inventory(ctx, &server, request.resume),
            ProvisionStep::ProxyRoute => documents::add_proxy_route(ctx, &server),
            ProvisionStep::ComposeService => documents::upsert_compose_service(ctx, &server),
            ProvisionStep::Scaffold => scaffold::scaffold(ctx, &server).map(|report| {
                let path = report.server_dir.clone();
                let outcome = if report.is_unchanged() {
                    StepOutcome::Unchanged { path }
                } else {
                    StepOutcome::Written { path }
                };
                scaffold_report = report;
                outcome
            }),
        }
        .map_err(|source| step_failed(step, state, source))?;

        steps.push((step, outcome));
        state = state.advance();
    }

    info!(server = %server.name, server_type = %server.type_name, "server provisioned");
    Ok(ProvisionReport { record: server.record(), steps, scaffold: scaffold_report })
}

fn step_failed(step: ProvisionStep, state: ProvisionState, source: AppError) -> AppError {
    let completed = state.completed_steps();
    warn!(step = %step, completed = completed.len(), error = %source, "provisioning step failed");
    AppError::Provision { step, completed, source: Box::new(source) }
}
