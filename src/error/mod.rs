//! Error module for Olelo.
//!
//! The trie itself is total: no core operation fails on any input. Errors
//! exist only at the harness boundary (configuration loading, seed-file IO,
//! serialization) and are expressed as explicit types propagated with `?`.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Olelo.
pub type OleloResult<T> = Result<T, OleloError>;

/// Core error enum for Olelo.
#[derive(Error, Debug)]
pub enum OleloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during seed-file or config-file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
