//! Error types for the user directory.

use thiserror::Error;

/// Unified error type for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No record carries the requested id
    #[error("User not found: {0}")]
    NotFound(i32),

    /// Seed data could not be read or decoded
    #[error("Seed error: {0}")]
    Seed(String),

    /// Seed data contains the same id twice
    #[error("Duplicate user id in seed: {0}")]
    DuplicateId(i32),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Seed(err.to_string())
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        DirectoryError::Seed(err.to_string())
    }
}
