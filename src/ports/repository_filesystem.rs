//! Root-scoped filesystem operations.
//!
//! The port carries no knowledge of the managed documents; the domain decides
//! what to read and write, the adapter decides how.

use crate::domain::AppError;

/// Port for low-level filesystem operations.
///
/// All `path` arguments are relative to the root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Copy a file byte-for-byte, creating the destination's parent directories.
    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Read a file, or `None` when it does not exist.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        if !self.file_exists(path) {
            return Ok(None);
        }
        self.read_file(path).map(Some)
    }
}
