//! Server types and the capability descriptors that materialize them.

mod builtin;
mod descriptor;
mod registry;

pub use descriptor::{CapabilityDescriptor, VolumeBinding};
pub use registry::{DescriptorFactory, ServerTypeRegistry, normalize_type_name};
