//! Types command: describe the registered server types.

use crate::domain::{AppError, CapabilityDescriptor, ServerTypeRegistry};

/// A registered server type with the descriptor it currently produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTypeSummary {
    pub name: String,
    pub descriptor: CapabilityDescriptor,
}

impl ServerTypeSummary {
    /// Value of an environment entry such as `VERSION`.
    pub fn env(&self, key: &str) -> Option<&str> {
        self.descriptor.environment.iter().find_map(|entry| {
            entry.split_once('=').filter(|(name, _)| *name == key).map(|(_, value)| value)
        })
    }
}

pub fn execute(registry: &ServerTypeRegistry) -> Result<Vec<ServerTypeSummary>, AppError> {
    registry
        .list_registered_types()
        .into_iter()
        .map(|name| {
            let descriptor = registry.resolve(&name)?;
            Ok(ServerTypeSummary { name, descriptor })
        })
        .collect()
}
