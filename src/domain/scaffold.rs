//! Server directory layout derived from a capability descriptor.

use super::server_type::CapabilityDescriptor;

/// A template file copy from the type's template directory into the server directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCopy {
    pub source: String,
    pub destination: String,
}

/// Directories to create and templates to copy for one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub server_dir: String,
    /// Server directory first, then each subdirectory.
    pub directories: Vec<String>,
    pub copies: Vec<TemplateCopy>,
}

impl ScaffoldPlan {
    /// `server_dir` and `template_dir` are paths relative to the root.
    pub fn new(server_dir: &str, template_dir: &str, descriptor: &CapabilityDescriptor) -> Self {
        let mut directories = vec![server_dir.to_string()];
        directories.extend(
            descriptor.subdirectories.iter().map(|subdir| format!("{}/{}", server_dir, subdir)),
        );

        let copies = descriptor
            .template_files
            .iter()
            .map(|file| TemplateCopy {
                source: format!("{}/{}", template_dir, file),
                destination: format!("{}/{}", server_dir, file),
            })
            .collect();

        Self { server_dir: server_dir.to_string(), directories, copies }
    }
}
