use super::ProvisionStep;
use crate::domain::inventory::ServerRecord;

/// User input for one provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub name: String,
    pub server_type: String,
    pub address: String,
    /// Re-run a partially provisioned server whose inventory record matches.
    pub resume: bool,
}

/// What a completed step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step wrote `path`.
    Written { path: String },
    /// Nothing needed writing.
    Unchanged { path: String },
    /// Type resolution; no file involved.
    Resolved,
}

/// Directories and files touched by the scaffold step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub server_dir: String,
    /// Directories that did not exist before this run.
    pub created_directories: Vec<String>,
    pub copied: Vec<String>,
    /// Template destinations left alone because they already existed.
    pub skipped: Vec<String>,
}

impl ScaffoldReport {
    /// True when the run created no directory and copied no file.
    pub fn is_unchanged(&self) -> bool {
        self.created_directories.is_empty() && self.copied.is_empty()
    }
}

/// Result of a successful provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub record: ServerRecord,
    pub steps: Vec<(ProvisionStep, StepOutcome)>,
    pub scaffold: ScaffoldReport,
}

impl ProvisionReport {
    pub fn outcome(&self, step: ProvisionStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, outcome)| outcome)
    }
}
