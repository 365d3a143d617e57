mod template_assets;

pub use template_assets::{TemplateAsset, embedded_templates};
