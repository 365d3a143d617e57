//! mcctl: provision Minecraft servers across a JSON inventory, a Velocity
//! proxy config and a docker-compose manifest, and scaffold their directories.

mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ProvisionReport, ProvisionRequest, ProvisionStep, ServerTypeSummary, StepOutcome, Workspace,
    add_server, add_server_in, init_in, list_servers_in, server_type_names, server_types,
};
pub use domain::{AppError, McctlConfig, ServerRecord};
