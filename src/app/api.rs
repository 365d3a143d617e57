//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemStore;
use crate::adapters::assets::embedded_templates;
use crate::app::commands::{add, init, list, types};
use crate::app::{AppContext, config};
use crate::domain::{ServerRecord, ServerTypeRegistry};

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::types::ServerTypeSummary;
pub use crate::domain::{AppError, ProvisionReport, ProvisionRequest, ProvisionStep, StepOutcome};

/// Where commands operate: the root directory and an optional explicit config file.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Workspace {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()), config: None }
    }

    fn root_path(&self) -> Result<PathBuf, AppError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Build and validate the registry of server types.
fn registry() -> Result<ServerTypeRegistry, AppError> {
    let registry = ServerTypeRegistry::builtin();
    registry.validate()?;
    Ok(registry)
}

/// Create an `AppContext` for a workspace.
fn create_context(workspace: &Workspace) -> Result<AppContext<FilesystemStore>, AppError> {
    let store = FilesystemStore::new(workspace.root_path()?);
    let config = match workspace.config.as_deref() {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(&store)?,
    };
    Ok(AppContext::new(store, registry()?, config))
}

// =============================================================================
// Add Command API
// =============================================================================

/// Provision a server in the current directory.
pub fn add_server(request: &ProvisionRequest) -> Result<ProvisionReport, AppError> {
    add_server_in(&Workspace::default(), request)
}

/// Provision a server in the given workspace.
pub fn add_server_in(
    workspace: &Workspace,
    request: &ProvisionRequest,
) -> Result<ProvisionReport, AppError> {
    let ctx = create_context(workspace)?;
    add::execute(&ctx, request)
}

// =============================================================================
// Read-only Command API
// =============================================================================

/// Servers recorded in the inventory of the given workspace.
pub fn list_servers_in(workspace: &Workspace) -> Result<Vec<ServerRecord>, AppError> {
    let ctx = create_context(workspace)?;
    list::execute(&ctx)
}

/// Registered server types with their descriptors.
pub fn server_types() -> Result<Vec<ServerTypeSummary>, AppError> {
    types::execute(&registry()?)
}

/// Registered server type names, sorted.
pub fn server_type_names() -> Result<Vec<String>, AppError> {
    Ok(registry()?.list_registered_types().into_iter().collect())
}

// =============================================================================
// Init Command API
// =============================================================================

/// Install the embedded default templates into the given workspace.
pub fn init_in(workspace: &Workspace) -> Result<InitOutcome, AppError> {
    let ctx = create_context(workspace)?;
    init::execute(&ctx, &embedded_templates()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request(name: &str) -> ProvisionRequest {
        ProvisionRequest {
            name: name.to_string(),
            server_type: "paper".to_string(),
            address: format!("{}:25565", name),
            resume: false,
        }
    }

    #[test]
    fn init_then_add_then_list() {
        let temp = tempdir().unwrap();
        let workspace = Workspace::at(temp.path());

        let outcome = init_in(&workspace).unwrap();
        assert!(!outcome.created.is_empty());

        add_server_in(&workspace, &request("lobby")).unwrap();
        add_server_in(&workspace, &request("hub")).unwrap();

        let names: Vec<String> =
            list_servers_in(&workspace).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["lobby", "hub"]);
        assert!(temp.path().join("minecraft/servers/hub/plugins").is_dir());
        assert!(temp.path().join("minecraft/servers/hub/paper-global.yml").is_file());
    }

    #[test]
    fn explicit_config_file_relocates_the_layout() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("custom.toml");
        std::fs::write(&config_path, "[layout]\ngame_dir = \"games\"\n").unwrap();
        let workspace =
            Workspace { root: Some(temp.path().to_path_buf()), config: Some(config_path) };

        init_in(&workspace).unwrap();
        add_server_in(&workspace, &request("lobby")).unwrap();

        assert!(temp.path().join("games/servers.json").is_file());
        assert!(temp.path().join("games/servers/lobby").is_dir());
    }

    #[test]
    fn server_type_names_are_sorted() {
        assert_eq!(server_type_names().unwrap(), ["forge", "paper", "vanilla"]);
    }
}
