use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{BuildSpec, Environment, Networks, ServiceSpec};
use crate::domain::AppError;
use crate::domain::server_type::CapabilityDescriptor;

const RESTART_POLICY: &str = "unless-stopped";
const DOCKERFILE: &str = "Dockerfile";

/// Values used when the manifest has to be created or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeDefaults<'a> {
    pub version: &'a str,
    /// Shared external network every generated service joins.
    pub network: &'a str,
}

/// Paths and network a generated service refers to.
///
/// Directories are relative to the manifest's own directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceLayout<'a> {
    pub servers_dir: &'a str,
    pub templates_dir: &'a str,
    pub network: &'a str,
}

pub fn container_name(server_name: &str) -> String {
    format!("minecraft-{}-server", server_name)
}

/// Build the service entry for one server from its type descriptor.
pub fn build_service(
    server_name: &str,
    descriptor: &CapabilityDescriptor,
    layout: &ServiceLayout<'_>,
) -> ServiceSpec {
    ServiceSpec {
        build: Some(BuildSpec::Config {
            context: format!("./{}/{}", layout.templates_dir, descriptor.template_path),
            dockerfile: Some(DOCKERFILE.to_string()),
        }),
        container_name: Some(container_name(server_name)),
        environment: Some(Environment::List(descriptor.environment.clone())),
        volumes: descriptor
            .volume_bindings
            .iter()
            .map(|binding| binding.render(layout.servers_dir, server_name))
            .collect(),
        networks: Some(Networks::List(vec![layout.network.to_string()])),
        restart: Some(RESTART_POLICY.to_string()),
        tty: true,
        stdin_open: true,
        ..ServiceSpec::default()
    }
}

/// Insert or replace `services.<server_name>` and return the new manifest.
///
/// `existing` is `None` when the file is absent. Other services, networks,
/// volumes and top-level keys are carried over unchanged.
pub fn upsert_service(
    path: &str,
    existing: Option<&str>,
    server_name: &str,
    service: &ServiceSpec,
    defaults: &ComposeDefaults<'_>,
) -> Result<String, AppError> {
    let mut root = match existing {
        Some(content) => parse_root(path, content)?,
        None => default_manifest(defaults),
    };

    let service_value = service.to_value()?;
    let services = child_mapping(&mut root, "services", path)?;
    if services.insert(Value::from(server_name), service_value).is_some() {
        debug!(service = server_name, "replacing existing compose service");
    }

    let networks = child_mapping(&mut root, "networks", path)?;
    if !networks.contains_key(defaults.network) {
        networks.insert(Value::from(defaults.network), external_network());
    }

    serde_yaml::to_string(&Value::Mapping(root))
        .map_err(|err| AppError::InternalError(format!("Failed to encode {}: {}", path, err)))
}

/// Comments are not kept, and aliases come back expanded on write.
fn parse_root(path: &str, content: &str) -> Result<Mapping, AppError> {
    let value: Value = serde_yaml::from_str(content)
        .map_err(|err| AppError::ConfigParse { path: path.to_string(), details: err.to_string() })?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(AppError::schema_violation(path, "<root>", "a mapping", yaml_type(&other))),
    }
}

fn default_manifest(defaults: &ComposeDefaults<'_>) -> Mapping {
    let mut networks = Mapping::new();
    networks.insert(Value::from(defaults.network), external_network());

    let mut root = Mapping::new();
    root.insert(Value::from("version"), Value::from(defaults.version));
    root.insert(Value::from("services"), Value::Mapping(Mapping::new()));
    root.insert(Value::from("networks"), Value::Mapping(networks));
    root
}

fn external_network() -> Value {
    let mut network = Mapping::new();
    network.insert(Value::from("external"), Value::Bool(true));
    Value::Mapping(network)
}

/// Mapping stored under `key`, created when absent or null.
fn child_mapping<'a>(
    root: &'a mut Mapping,
    key: &str,
    path: &str,
) -> Result<&'a mut Mapping, AppError> {
    let slot = root.entry(Value::from(key)).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Mapping(Mapping::new());
    }
    let found = yaml_type(slot);
    match slot {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::schema_violation(path, key, "a mapping", found)),
    }
}

fn yaml_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
