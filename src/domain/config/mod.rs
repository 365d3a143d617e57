pub mod model;
pub mod parse;
pub mod paths;

pub use model::{ComposeConfig, LayoutConfig, McctlConfig, ProxyConfig};
pub use parse::parse_config_content;
