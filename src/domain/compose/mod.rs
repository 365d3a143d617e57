//! Compose manifest (docker-compose.yml) merge.

mod manifest;
mod service;

pub use manifest::{ComposeDefaults, ServiceLayout, build_service, container_name, upsert_service};
pub use service::{BuildSpec, Environment, Networks, ServiceSpec};
