pub mod server_name;
pub mod validation;

pub use server_name::ServerName;
