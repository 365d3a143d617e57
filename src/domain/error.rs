use std::io;

use thiserror::Error;

use super::provisioning::ProvisionStep;

/// Library-wide error type for mcctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// `mcctl.toml` is not valid TOML or does not match the expected shape.
    #[error("Invalid mcctl.toml: {0}")]
    ConfigFile(#[from] toml::de::Error),

    /// Server type is not registered.
    #[error("Unknown server type '{name}'. Available: {available}")]
    UnknownServerType { name: String, available: String },

    /// A registered server type produced an unusable descriptor.
    #[error("Server type '{name}' is misconfigured: {reason}")]
    InvalidServerType { name: String, reason: String },

    /// Server name is not a safe identifier.
    #[error(
        "Invalid server name '{0}': must be alphanumeric with hyphens or underscores, starting with a letter or digit"
    )]
    InvalidServerName(String),

    /// Server address is empty or contains whitespace.
    #[error("Invalid server address '{0}'")]
    InvalidAddress(String),

    /// A server with this name is already recorded in the inventory.
    #[error("Server '{0}' already exists in the inventory")]
    DuplicateServer(String),

    /// The inventory file exists but is not a JSON array.
    #[error("Inventory {path} is corrupt: {details}")]
    InventoryCorrupt { path: String, details: String },

    /// A target document exists but does not parse in its format.
    #[error("Failed to parse {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// A target document parses, but a section to update has the wrong shape.
    #[error("Schema violation in {path}: '{key}' must be {expected}, found {found}")]
    SchemaViolation { path: String, key: String, expected: &'static str, found: String },

    /// A template file required by the server type is missing.
    #[error("Template file missing for server type '{server_type}': {path}")]
    TemplateFileMissing { server_type: String, path: String },

    /// Path escapes the root directory.
    #[error("Path escapes root directory: {0}")]
    PathTraversal(String),

    /// A provisioning step failed; earlier steps remain on disk.
    #[error("Provisioning failed at step '{step}' (completed: {}): {source}", format_steps(.completed))]
    Provision {
        step: ProvisionStep,
        completed: Vec<ProvisionStep>,
        #[source]
        source: Box<AppError>,
    },

    /// Internal error (serialization of generated content, embedded assets).
    #[error("Internal error: {0}")]
    InternalError(String),
}

fn format_steps(steps: &[ProvisionStep]) -> String {
    if steps.is_empty() {
        return "none".to_string();
    }
    steps.iter().map(|step| step.label()).collect::<Vec<_>>().join(", ")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn schema_violation(
        path: &str,
        key: &str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        AppError::SchemaViolation {
            path: path.to_string(),
            key: key.to_string(),
            expected,
            found: found.into(),
        }
    }

    /// The step a provisioning failure occurred at, if any.
    pub fn failed_step(&self) -> Option<ProvisionStep> {
        match self {
            AppError::Provision { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The innermost error, unwrapping provisioning step context.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Provision { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
