//! Error types for the masking core.

use thiserror::Error;

/// Result type for masking operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur in the masking core.
///
/// Per-line classification or extraction misses are not errors; they
/// degrade to pass-through inside the pipeline. These variants cover the
/// policy-file surface only.
#[derive(Error, Debug)]
pub enum RedactError {
    /// Invalid mask policy contents.
    #[error("policy error: {0}")]
    Policy(String),

    /// I/O error while reading or writing a policy file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a policy file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
