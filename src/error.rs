//! Error types for the chat relay.

use thiserror::Error;

use crate::chat::ChatError;

/// Common error type for the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected chat intent.
    #[error("chat error: {0}")]
    Chat(#[from] ChatError),
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
