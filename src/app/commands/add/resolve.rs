use crate::domain::identities::validation::validate_address;
use crate::domain::server_type::normalize_type_name;
use crate::domain::{
    AppError, CapabilityDescriptor, ProvisionRequest, ServerName, ServerRecord, ServerTypeRegistry,
};

/// A request after type resolution and input validation.
#[derive(Debug, Clone)]
pub struct ResolvedServer {
    pub name: ServerName,
    /// Canonical lower-case type name.
    pub type_name: String,
    pub address: String,
    pub descriptor: CapabilityDescriptor,
}

impl ResolvedServer {
    pub fn record(&self) -> ServerRecord {
        ServerRecord {
            name: self.name.to_string(),
            version: self.type_name.clone(),
            address: self.address.clone(),
        }
    }
}

pub(super) fn resolve(
    registry: &ServerTypeRegistry,
    request: &ProvisionRequest,
) -> Result<ResolvedServer, AppError> {
    let descriptor = registry.resolve(&request.server_type)?;
    let name = ServerName::new(request.name.trim())?;
    let address = request.address.trim();
    if !validate_address(address) {
        return Err(AppError::InvalidAddress(request.address.clone()));
    }

    Ok(ResolvedServer {
        name,
        type_name: normalize_type_name(&request.server_type),
        address: address.to_string(),
        descriptor,
    })
}
