//! `mcctl.toml` loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, McctlConfig};
use crate::ports::RepositoryFilesystem;

/// Load `mcctl.toml` from the root, falling back to defaults when it is absent.
pub fn load_config<F: RepositoryFilesystem>(repository: &F) -> Result<McctlConfig, AppError> {
    match repository.read_optional(paths::CONFIG_FILE)? {
        Some(content) => {
            debug!(path = paths::CONFIG_FILE, "loading configuration");
            config::parse_config_content(&content)
        }
        None => {
            debug!("no {} found, using defaults", paths::CONFIG_FILE);
            Ok(McctlConfig::default())
        }
    }
}

/// Load an explicitly named configuration file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<McctlConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(path)?;
    config::parse_config_content(&content)
}
