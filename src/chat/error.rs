//! Errors raised by the chat core.

use thiserror::Error;

use super::session::SessionId;

/// Rejections of a join or send intent.
///
/// None of these are fatal: a rejected intent simply produces no broadcast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The session is not (or no longer) connected.
    #[error("session {0} is not connected")]
    InvalidSession(SessionId),

    /// Join name is empty after trimming.
    #[error("display name cannot be empty")]
    EmptyName,

    /// Message text is empty after trimming.
    #[error("message cannot be empty")]
    EmptyMessage,

    /// The session tried to send before joining.
    #[error("session {0} has not joined yet")]
    NotJoined(SessionId),
}

impl ChatError {
    /// Stable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ChatError::InvalidSession(_) => "invalid_session",
            ChatError::EmptyName => "empty_name",
            ChatError::EmptyMessage => "empty_message",
            ChatError::NotJoined(_) => "not_joined",
        }
    }
}
