//! Test doubles for unit tests.

mod recording_fs;

pub use recording_fs::{RecordingFilesystem, WriteOp};
