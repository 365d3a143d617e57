//! Provisioning steps, their ordering, and the report of a finished run.

mod report;
mod state;

pub use report::{ProvisionReport, ProvisionRequest, ScaffoldReport, StepOutcome};
pub use state::{ProvisionState, ProvisionStep};
