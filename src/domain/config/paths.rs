//! Paths of the managed files, relative to the root.

use super::McctlConfig;

/// Configuration file name at the root.
pub const CONFIG_FILE: &str = "mcctl.toml";

fn join(base: &str, child: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), child.trim_start_matches('/'))
}

/// `minecraft/servers.json`
pub fn inventory(config: &McctlConfig) -> String {
    join(&config.layout.game_dir, &config.layout.inventory_file)
}

/// `velocity/velocity.toml`
pub fn proxy_config(config: &McctlConfig) -> String {
    config.layout.proxy_config.clone()
}

/// `minecraft/docker-compose.yml`
pub fn compose(config: &McctlConfig) -> String {
    join(&config.layout.game_dir, &config.layout.compose_file)
}

/// `minecraft/servers/<name>`
pub fn server_dir(config: &McctlConfig, server_name: &str) -> String {
    join(&join(&config.layout.game_dir, &config.layout.servers_dir), server_name)
}

/// `minecraft/template`
pub fn templates_root(config: &McctlConfig) -> String {
    join(&config.layout.game_dir, &config.layout.templates_dir)
}

/// `minecraft/template/<template_path>`
pub fn template_dir(config: &McctlConfig, template_path: &str) -> String {
    join(&templates_root(config), template_path)
}
