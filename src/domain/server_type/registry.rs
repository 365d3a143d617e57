use std::collections::{BTreeMap, BTreeSet};

use super::CapabilityDescriptor;
use crate::domain::AppError;

/// Produces a fresh descriptor for one provisioning call.
pub type DescriptorFactory = fn() -> CapabilityDescriptor;

/// Canonical registry key for a user-supplied type name.
pub fn normalize_type_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive table of server types.
///
/// Registration happens once at start-up; afterwards the registry is only read.
#[derive(Debug, Clone, Default)]
pub struct ServerTypeRegistry {
    factories: BTreeMap<String, DescriptorFactory>,
}

impl ServerTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with vanilla, paper and forge registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, factory) in super::builtin::BUILTIN_TYPES {
            registry.register(name, *factory);
        }
        registry
    }

    /// Store `factory` under `type_name`, replacing any earlier registration.
    pub fn register(&mut self, type_name: &str, factory: DescriptorFactory) {
        self.factories.insert(normalize_type_name(type_name), factory);
    }

    /// Look up a type and produce its descriptor.
    pub fn resolve(&self, type_name: &str) -> Result<CapabilityDescriptor, AppError> {
        let key = normalize_type_name(type_name);
        let factory = self.factories.get(&key).ok_or_else(|| AppError::UnknownServerType {
            name: type_name.to_string(),
            available: self.available(),
        })?;
        Ok(factory())
    }

    pub fn list_registered_types(&self) -> BTreeSet<String> {
        self.factories.keys().cloned().collect()
    }

    /// Check every registered type yields a usable descriptor.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.factories.is_empty() {
            return Err(AppError::config_error("No server types are registered"));
        }
        for (name, factory) in &self.factories {
            factory().validate(name)?;
        }
        Ok(())
    }

    fn available(&self) -> String {
        if self.factories.is_empty() {
            return "(none)".to_string();
        }
        self.factories.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
