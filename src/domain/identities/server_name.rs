use std::fmt;

use super::validation::validate_identifier;
use crate::domain::AppError;

/// A validated server name.
///
/// The name becomes a directory under the servers tree, a key in the proxy
/// `servers` table and a service key in the compose manifest, so it is
/// restricted to ASCII alphanumerics, `-` and `_`, starting with a letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerName(String);

impl ServerName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidServerName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
