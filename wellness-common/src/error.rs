//! Common error types for the wellness service

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for wellness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the wellness crates
#[derive(Error, Debug)]
pub enum Error {
    /// Health payload failed field-level validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
