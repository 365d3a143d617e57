use std::collections::BTreeSet;

use crate::domain::AppError;

/// A host:container volume mount.
///
/// `host` is relative to the server's own directory (`servers/<name>/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeBinding {
    pub host: String,
    pub container: String,
}

impl VolumeBinding {
    pub fn new(host: &str, container: &str) -> Self {
        Self { host: host.to_string(), container: container.to_string() }
    }

    /// Render the compose short syntax, e.g. `./servers/alpha/world:/data/world`.
    pub fn render(&self, servers_dir: &str, server_name: &str) -> String {
        format!("./{}/{}/{}:{}", servers_dir, server_name, self.host, self.container)
    }
}

/// Everything needed to materialize one server type across the inventory,
/// proxy config, compose manifest and the on-disk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    /// `KEY=VALUE` entries for the container environment.
    pub environment: Vec<String>,
    pub volume_bindings: Vec<VolumeBinding>,
    /// Template directory relative to the templates root, e.g. `vanilla`.
    pub template_path: String,
    pub subdirectories: BTreeSet<String>,
    pub template_files: Vec<String>,
}

impl CapabilityDescriptor {
    /// Check that the descriptor can produce a usable compose service and scaffold.
    pub fn validate(&self, type_name: &str) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidServerType {
            name: type_name.to_string(),
            reason: reason.to_string(),
        };

        if self.environment.is_empty() {
            return Err(invalid("environment is empty"));
        }
        if let Some(entry) = self.environment.iter().find(|entry| !is_env_entry(entry)) {
            return Err(invalid(&format!("environment entry '{}' is not KEY=VALUE", entry)));
        }
        if self.volume_bindings.is_empty() {
            return Err(invalid("no volume bindings"));
        }
        if self.volume_bindings.iter().any(|v| v.host.is_empty() || v.container.is_empty()) {
            return Err(invalid("volume binding with empty path"));
        }
        if self.template_path.trim().is_empty() {
            return Err(invalid("template path is empty"));
        }
        if self.subdirectories.is_empty() {
            return Err(invalid("no subdirectories"));
        }
        if self.template_files.is_empty() {
            return Err(invalid("no template files"));
        }
        let relatives = self
            .subdirectories
            .iter()
            .chain(&self.template_files)
            .chain(std::iter::once(&self.template_path));
        for relative in relatives {
            if relative.is_empty() || relative.contains("..") || relative.starts_with('/') {
                return Err(invalid(&format!("unsafe relative path '{}'", relative)));
            }
        }
        Ok(())
    }
}

fn is_env_entry(entry: &str) -> bool {
    matches!(entry.split_once('='), Some((key, _)) if !key.is_empty())
}
