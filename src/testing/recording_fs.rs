//! In-memory `RepositoryFilesystem` that records every mutating call.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// A mutating filesystem call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Write(String),
    Copy { from: String, to: String },
    CreateDir(String),
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
    writes: Vec<WriteOp>,
    failing: BTreeSet<String>,
}

/// In-memory filesystem for unit tests.
///
/// Tests seed files before handing the double to production code, then
/// inspect file contents and the recorded write log. Paths registered with
/// `fail_writes_to` reject writes with a permission error.
#[derive(Clone, Debug, Default)]
pub struct RecordingFilesystem {
    state: Arc<Mutex<State>>,
}

impl RecordingFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn add(&self, path: &str, content: &str) {
        self.state.lock().unwrap().files.insert(path.to_string(), content.to_string());
    }

    /// Make every write or copy targeting `path` fail.
    pub fn fail_writes_to(&self, path: &str) {
        self.state.lock().unwrap().failing.insert(path.to_string());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    pub fn writes(&self) -> Vec<WriteOp> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes.len()
    }

    fn check_writable(state: &State, path: &str) -> Result<(), AppError> {
        if state.failing.contains(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {} denied", path),
            )));
        }
        Ok(())
    }
}

impl RepositoryFilesystem for RecordingFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writable(&state, path)?;
        state.writes.push(WriteOp::Write(path.to_string()));
        state.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writable(&state, to)?;
        let content = state.files.get(from).cloned().ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", from)))
        })?;
        state.writes.push(WriteOp::Copy { from: from.to_string(), to: to.to_string() });
        state.files.insert(to.to_string(), content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let state = self.state.lock().unwrap();
        if state.files.contains_key(path) || state.dirs.contains(path) {
            return true;
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        state.files.keys().any(|key| key.starts_with(&prefix))
    }

    fn is_dir(&self, path: &str) -> bool {
        let state = self.state.lock().unwrap();
        let prefix = format!("{}/", path.trim_end_matches('/'));
        state.dirs.contains(path) || state.files.keys().any(|key| key.starts_with(&prefix))
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writable(&state, path)?;
        state.writes.push(WriteOp::CreateDir(path.to_string()));
        state.dirs.insert(path.to_string());
        Ok(())
    }
}
