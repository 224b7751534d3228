//! WebSocket message types for chat communication.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatError, ChatEvent};

/// Messages sent from client to server.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Join under a display name.
    Join {
        /// Display name.
        name: String,
    },
    /// Send a chat message.
    SendMessage {
        /// Message body.
        text: String,
    },
    /// Heartbeat ping.
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The roster changed.
    RosterUpdated {
        /// Display names of all joined participants.
        names: Vec<String>,
    },
    /// A chat message arrived.
    MessageReceived {
        /// Author's display name.
        author: String,
        /// Message body.
        text: String,
    },
    /// Error message.
    Error {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
    },
    /// Heartbeat pong response.
    Pong,
}

impl ServerMessage {
    /// Create an error message.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<ChatEvent> for ServerMessage {
    fn from(event: ChatEvent) -> Self {
        match event {
            ChatEvent::RosterUpdated { names } => Self::RosterUpdated { names },
            ChatEvent::MessageReceived(msg) => Self::MessageReceived {
                author: msg.author,
                text: msg.text,
            },
        }
    }
}

impl From<&ChatError> for ServerMessage {
    fn from(err: &ChatError) -> Self {
        Self::error(err.code(), err.to_string())
    }
}
