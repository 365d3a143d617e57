use crate::domain::{McctlConfig, ServerTypeRegistry};
use crate::ports::RepositoryFilesystem;

/// Application context holding dependencies for command execution.
///
/// The registry is validated before the context is built and is read-only
/// afterwards.
pub struct AppContext<F: RepositoryFilesystem> {
    filesystem: F,
    registry: ServerTypeRegistry,
    config: McctlConfig,
}

impl<F: RepositoryFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F, registry: ServerTypeRegistry, config: McctlConfig) -> Self {
        Self { filesystem, registry, config }
    }

    /// Get a reference to the root-scoped filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the server type registry.
    pub fn registry(&self) -> &ServerTypeRegistry {
        &self.registry
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &McctlConfig {
        &self.config
    }
}
