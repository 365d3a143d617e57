pub mod add;
pub mod init;
pub mod list;
pub mod types;

use std::io;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// Read a document that may be absent. Bytes that are not UTF-8 are reported
/// through `malformed` with the document path.
pub(crate) fn read_document<F: RepositoryFilesystem>(
    fs: &F,
    path: &str,
    malformed: fn(String, String) -> AppError,
) -> Result<Option<String>, AppError> {
    match fs.read_optional(path) {
        Err(AppError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            Err(malformed(path.to_string(), err.to_string()))
        }
        other => other,
    }
}
