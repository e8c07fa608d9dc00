//! Error types for the confmask driver.

use crate::exit_codes::ExitCode;
use cm_redact::RedactError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that terminate a masking run.
///
/// Per-line misses never reach this type; only collaborator failures
/// (file I/O, policy loading) are fatal.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Failed to open or read the input file.
    #[error("failed to read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to load the mask policy.
    #[error("failed to load policy: {0}")]
    Policy(#[from] RedactError),
}

impl CoreError {
    /// Map this error to a stable process exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CoreError::Input { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ExitCode::InputError,
                std::io::ErrorKind::PermissionDenied => ExitCode::PermissionError,
                _ => ExitCode::IoError,
            },
            CoreError::Output { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => ExitCode::PermissionError,
                _ => ExitCode::IoError,
            },
            CoreError::Policy(_) => ExitCode::ArgsError,
        }
    }
}
