//! `mcctl.toml` configuration models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `mcctl.toml` at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McctlConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl McctlConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.layout.validate()?;
        self.compose.validate()?;
        self.proxy.validate()?;
        Ok(())
    }
}

/// Where the managed files live, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory holding the inventory, compose manifest, servers and templates.
    #[serde(default = "default_game_dir")]
    pub game_dir: String,
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
    #[serde(default = "default_compose_file")]
    pub compose_file: String,
    #[serde(default = "default_servers_dir")]
    pub servers_dir: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Proxy config path relative to the root (not the game directory).
    #[serde(default = "default_proxy_config")]
    pub proxy_config: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            game_dir: default_game_dir(),
            inventory_file: default_inventory_file(),
            compose_file: default_compose_file(),
            servers_dir: default_servers_dir(),
            templates_dir: default_templates_dir(),
            proxy_config: default_proxy_config(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("layout.game_dir", &self.game_dir),
            ("layout.inventory_file", &self.inventory_file),
            ("layout.compose_file", &self.compose_file),
            ("layout.servers_dir", &self.servers_dir),
            ("layout.templates_dir", &self.templates_dir),
            ("layout.proxy_config", &self.proxy_config),
        ] {
            validate_relative_path(key, value)?;
        }
        // Compose volume and build paths are written relative to the game directory.
        for (key, value) in
            [("layout.inventory_file", &self.inventory_file), ("layout.compose_file", &self.compose_file)]
        {
            if value.contains(['/', '\\']) {
                return Err(AppError::config_error(format!("{} must be a file name", key)));
            }
        }
        Ok(())
    }
}

/// Compose manifest settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// `version:` written when the manifest is created.
    #[serde(default = "default_compose_version")]
    pub version: String,
    /// Shared external network joined by every server.
    #[serde(default = "default_network")]
    pub network: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { version: default_compose_version(), network: default_network() }
    }
}

impl ComposeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.version.trim().is_empty() {
            return Err(AppError::config_error("compose.version must not be empty"));
        }
        if self.network.trim().is_empty() {
            return Err(AppError::config_error("compose.network must not be empty"));
        }
        Ok(())
    }
}

/// Proxy config settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    /// Domain for forced hosts: `<server>.<domain>`.
    #[serde(default = "default_forced_host_domain")]
    pub forced_host_domain: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { forced_host_domain: default_forced_host_domain() }
    }
}

impl ProxyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let domain = self.forced_host_domain.trim();
        if domain.is_empty() || domain.starts_with('.') || domain.chars().any(char::is_whitespace)
        {
            return Err(AppError::config_error(format!(
                "proxy.forced_host_domain '{}' is not a valid domain",
                self.forced_host_domain
            )));
        }
        Ok(())
    }
}

fn validate_relative_path(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    if value.starts_with('/') || value.starts_with('\\') || value.contains(':') {
        return Err(AppError::config_error(format!("{} must be a relative path", key)));
    }
    if value.split(['/', '\\']).any(|part| part == "..") {
        return Err(AppError::config_error(format!("{} must not contain '..'", key)));
    }
    Ok(())
}

fn default_game_dir() -> String {
    "minecraft".to_string()
}

fn default_inventory_file() -> String {
    "servers.json".to_string()
}

fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}

fn default_servers_dir() -> String {
    "servers".to_string()
}

fn default_templates_dir() -> String {
    "template".to_string()
}

fn default_proxy_config() -> String {
    "velocity/velocity.toml".to_string()
}

fn default_compose_version() -> String {
    "3.8".to_string()
}

fn default_network() -> String {
    "home-network".to_string()
}

fn default_forced_host_domain() -> String {
    "example.com".to_string()
}
