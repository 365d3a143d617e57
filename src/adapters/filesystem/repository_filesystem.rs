//! `RepositoryFilesystem` over std::fs.

use std::fs;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.rooted(path)?)?)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let target = self.rooted(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::write(target, content)?)
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.rooted(from)?;
        let destination = self.rooted(to)?;
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.rooted(path).is_ok_and(|target| target.exists())
    }

    fn is_dir(&self, path: &str) -> bool {
        self.rooted(path).is_ok_and(|target| target.is_dir())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        Ok(fs::create_dir_all(self.rooted(path)?)?)
    }
}
