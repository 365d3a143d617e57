//! Built-in Minecraft server types.

use std::collections::BTreeSet;

use super::{CapabilityDescriptor, DescriptorFactory, VolumeBinding};

pub(super) const BUILTIN_TYPES: &[(&str, DescriptorFactory)] =
    &[("vanilla", vanilla), ("paper", paper), ("forge", forge)];

/// Files every server type ships from its template directory.
const COMMON_TEMPLATE_FILES: [&str; 3] = ["ops.json", "whitelist.json", "server.properties"];

fn environment(server_type: &str, version: &str, memory: &str) -> Vec<String> {
    vec![
        "EULA=true".to_string(),
        format!("TYPE={}", server_type),
        format!("VERSION={}", version),
        format!("MEMORY={}", memory),
    ]
}

/// `world` first, type-specific mounts next, shared config files last.
fn volume_bindings(extra: &[(&str, &str)]) -> Vec<VolumeBinding> {
    let mut bindings = vec![VolumeBinding::new("world", "/data/world")];
    bindings.extend(extra.iter().map(|(host, container)| VolumeBinding::new(host, container)));
    bindings.extend([
        VolumeBinding::new("ops.json", "/data/ops.json"),
        VolumeBinding::new("server.properties", "/data/server.properties"),
        VolumeBinding::new("whitelist.json", "/data/whitelist.json"),
    ]);
    bindings
}

fn template_files(extra: &[&str]) -> Vec<String> {
    COMMON_TEMPLATE_FILES.iter().chain(extra).map(|file| file.to_string()).collect()
}

fn subdirectories(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn vanilla() -> CapabilityDescriptor {
    CapabilityDescriptor {
        environment: environment("VANILLA", "1.20.1", "2G"),
        volume_bindings: volume_bindings(&[]),
        template_path: "vanilla".to_string(),
        subdirectories: subdirectories(&["world"]),
        template_files: template_files(&[]),
    }
}

fn paper() -> CapabilityDescriptor {
    CapabilityDescriptor {
        environment: environment("PAPER", "1.20.1", "4G"),
        volume_bindings: volume_bindings(&[
            ("plugins", "/data/plugins"),
            ("paper-global.yml", "/config/paper-global.yml"),
        ]),
        template_path: "paper".to_string(),
        subdirectories: subdirectories(&["world", "plugins"]),
        template_files: template_files(&["paper-global.yml"]),
    }
}

fn forge() -> CapabilityDescriptor {
    CapabilityDescriptor {
        environment: environment("FORGE", "1.18.2", "4G"),
        volume_bindings: volume_bindings(&[("mods", "/data/mods"), ("config", "/data/config")]),
        template_path: "forge".to_string(),
        subdirectories: subdirectories(&["world", "mods", "config"]),
        template_files: template_files(&[]),
    }
}
