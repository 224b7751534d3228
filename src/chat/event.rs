//! Events the core pushes to connections.

/// A chat message.
///
/// The author's name is captured by value when the message is created, so a
/// later rename or disconnect does not alter messages already delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author's display name at send time.
    pub author: String,
    /// Message body.
    pub text: String,
}

impl ChatMessage {
    /// Create a new chat message.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Event queued on a connection's outbound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The roster changed.
    RosterUpdated {
        /// Display names of all joined sessions.
        names: Vec<String>,
    },
    /// A message arrived.
    MessageReceived(ChatMessage),
}

impl ChatEvent {
    /// Create a roster update.
    pub fn roster(names: Vec<String>) -> Self {
        Self::RosterUpdated { names }
    }

    /// Get a short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatEvent::RosterUpdated { .. } => "roster_updated",
            ChatEvent::MessageReceived(_) => "message_received",
        }
    }
}

impl From<ChatMessage> for ChatEvent {
    fn from(message: ChatMessage) -> Self {
        Self::MessageReceived(message)
    }
}
