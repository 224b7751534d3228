//! Server-side state for one live connection.

use std::fmt;

use tokio::sync::mpsc;

use super::event::ChatEvent;

/// Sending half of a connection's event queue.
pub type EventSender = mpsc::UnboundedSender<ChatEvent>;

/// Receiving half of a connection's event queue, owned by the transport.
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Opaque connection identifier.
///
/// Allocated by the registry at connect time from a monotonically increasing
/// counter, so an id is never handed out twice within one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Lifecycle phase of a session.
///
/// There is no `Terminated` variant: a terminated session is simply absent
/// from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Connected but no display name bound yet.
    Connected,
    /// Joined under a display name.
    Active {
        /// Display name bound by the latest join.
        name: String,
    },
}

/// A live connection tracked by the registry.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    state: SessionState,
    outbox: EventSender,
}

impl Session {
    /// Create a session in the `Connected` state.
    pub fn new(id: SessionId, outbox: EventSender) -> Self {
        Self {
            id,
            state: SessionState::Connected,
            outbox,
        }
    }

    /// Get the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Display name, if the session has joined.
    pub fn name(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { name } => Some(name),
            SessionState::Connected => None,
        }
    }

    /// Whether the session has joined.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Bind a display name. Last write wins.
    ///
    /// Returns the previous name, if any.
    pub fn bind_name(&mut self, name: String) -> Option<String> {
        match std::mem::replace(&mut self.state, SessionState::Active { name }) {
            SessionState::Active { name } => Some(name),
            SessionState::Connected => None,
        }
    }

    /// Queue an event for this connection.
    ///
    /// Returns false if the transport side has already gone away.
    pub fn deliver(&self, event: ChatEvent) -> bool {
        self.outbox.send(event).is_ok()
    }
}
