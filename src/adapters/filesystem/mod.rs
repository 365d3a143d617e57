//! std::fs adapter for the `RepositoryFilesystem` port.
//!
//! Every managed path is relative to the mcctl root. Absolute paths and `..`
//! components are refused before touching the disk.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem store for one mcctl root.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a root-relative path onto the root.
    fn rooted(&self, relative: &str) -> Result<PathBuf, AppError> {
        let path = Path::new(relative);
        let stays_inside =
            path.components().all(|part| matches!(part, Component::Normal(_) | Component::CurDir));
        if relative.is_empty() || !stays_inside {
            return Err(AppError::PathTraversal(relative.to_string()));
        }
        Ok(self.root.join(path))
    }
}
