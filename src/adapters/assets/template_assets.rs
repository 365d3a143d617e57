//! Default server templates embedded in the binary.

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// One embedded template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    /// Path relative to the templates root, e.g. `vanilla/ops.json`.
    pub path: String,
    pub content: String,
}

/// All embedded template files, sorted by path.
pub fn embedded_templates() -> Result<Vec<TemplateAsset>, AppError> {
    let mut assets = Vec::new();
    collect_files(&TEMPLATES_DIR, &mut assets)?;
    assets.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(assets)
}

fn collect_files(dir: &Dir<'_>, out: &mut Vec<TemplateAsset>) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, out)?,
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::InternalError(format!("Embedded template {} is not UTF-8", path))
                })?;
                out.push(TemplateAsset { path, content: content.to_string() });
            }
        }
    }
    Ok(())
}
