//! Error types shared by the NetJudge tools.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a harness command.
///
/// Per-test outcomes of the test runner are not errors; they are reported
/// as verdicts and the batch carries on.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A command-line value failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Target instance directory is already present
    #[error("\"{}\" already exists.", .0.display())]
    AlreadyExists(PathBuf),

    /// Program under test exited unsuccessfully
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Program under test could not be started
    #[error("Failed to start process: {0}")]
    Spawn(String),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Network JSON could not be written or read
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HarnessError {
    /// Returns the error code string for this error
    pub fn code(&self) -> &'static str {
        match self {
            HarnessError::InvalidArgument(_) => "INVALID_ARGUMENT",
            HarnessError::AlreadyExists(_) => "ALREADY_EXISTS",
            HarnessError::ExecutionFailed(_) => "EXECUTION_FAILED",
            HarnessError::Spawn(_) => "SPAWN_ERROR",
            HarnessError::Io(_) => "FILE_ERROR",
            HarnessError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        HarnessError::InvalidArgument(message.into())
    }
}

/// Result type alias using HarnessError
pub type HarnessResult<T> = Result<T, HarnessError>;
