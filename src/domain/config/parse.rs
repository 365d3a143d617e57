//! Pure parse/validate for `mcctl.toml`.

use super::McctlConfig;
use crate::domain::AppError;

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<McctlConfig, AppError> {
    let config: McctlConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
