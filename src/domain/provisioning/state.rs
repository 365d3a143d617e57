use std::fmt;

/// One side effect of a provisioning run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisionStep {
    /// Resolve the server type (no I/O).
    ResolveType,
    /// Append the record to the inventory.
    Inventory,
    /// Add the backend route and forced host to the proxy config.
    ProxyRoute,
    /// Upsert the service in the compose manifest.
    ComposeService,
    /// Create the server directory and copy templates.
    Scaffold,
}

impl ProvisionStep {
    /// All steps in the order they run.
    pub const ALL: [ProvisionStep; 5] = [
        ProvisionStep::ResolveType,
        ProvisionStep::Inventory,
        ProvisionStep::ProxyRoute,
        ProvisionStep::ComposeService,
        ProvisionStep::Scaffold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProvisionStep::ResolveType => "resolve-type",
            ProvisionStep::Inventory => "inventory",
            ProvisionStep::ProxyRoute => "proxy-route",
            ProvisionStep::ComposeService => "compose-service",
            ProvisionStep::Scaffold => "scaffold",
        }
    }
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Progress of a provisioning run.
///
/// Each state names what has been committed so far; `pending_step` is the only
/// step allowed to run next, so steps execute once and in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionState {
    Start,
    TypeResolved,
    InventoryWritten,
    RouteWritten,
    ServiceWritten,
    Scaffolded,
}

impl ProvisionState {
    /// The step that moves this state forward, `None` when terminal.
    pub fn pending_step(&self) -> Option<ProvisionStep> {
        match self {
            ProvisionState::Start => Some(ProvisionStep::ResolveType),
            ProvisionState::TypeResolved => Some(ProvisionStep::Inventory),
            ProvisionState::InventoryWritten => Some(ProvisionStep::ProxyRoute),
            ProvisionState::RouteWritten => Some(ProvisionStep::ComposeService),
            ProvisionState::ServiceWritten => Some(ProvisionStep::Scaffold),
            ProvisionState::Scaffolded => None,
        }
    }

    /// State after the pending step succeeded.
    pub fn advance(self) -> Self {
        match self {
            ProvisionState::Start => ProvisionState::TypeResolved,
            ProvisionState::TypeResolved => ProvisionState::InventoryWritten,
            ProvisionState::InventoryWritten => ProvisionState::RouteWritten,
            ProvisionState::RouteWritten => ProvisionState::ServiceWritten,
            ProvisionState::ServiceWritten | ProvisionState::Scaffolded => {
                ProvisionState::Scaffolded
            }
        }
    }

    /// Steps already committed when in this state.
    pub fn completed_steps(&self) -> Vec<ProvisionStep> {
        let done = match self {
            ProvisionState::Start => 0,
            ProvisionState::TypeResolved => 1,
            ProvisionState::InventoryWritten => 2,
            ProvisionState::RouteWritten => 3,
            ProvisionState::ServiceWritten => 4,
            ProvisionState::Scaffolded => 5,
        };
        ProvisionStep::ALL[..done].to_vec()
    }
}
