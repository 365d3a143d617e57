pub mod compose;
pub mod config;
pub mod error;
pub mod identities;
pub mod inventory;
pub mod provisioning;
pub mod proxy_config;
pub mod scaffold;
pub mod server_type;

pub use config::McctlConfig;
pub use error::AppError;
pub use identities::ServerName;
pub use inventory::{DuplicatePolicy, InventoryMerge, ServerRecord};
pub use provisioning::{
    ProvisionReport, ProvisionRequest, ProvisionState, ProvisionStep, ScaffoldReport, StepOutcome,
};
pub use scaffold::{ScaffoldPlan, TemplateCopy};
pub use server_type::{CapabilityDescriptor, ServerTypeRegistry, VolumeBinding};
