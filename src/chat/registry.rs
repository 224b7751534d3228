//! Session registry.
//!
//! The registry is the single source of truth for who is connected and who
//! has joined. All state sits behind one lock; every roster broadcast is
//! queued while the write lock that caused it is still held, so the roster
//! each connection sees always matches some serialization of the completed
//! connect/join/disconnect calls.

use std::collections::BTreeMap;

use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};

use super::error::ChatError;
use super::event::ChatMessage;
use super::relay;
use super::session::{EventReceiver, Session, SessionId};
use super::validation::{validate_message, validate_name};

#[derive(Default)]
struct RegistryState {
    /// Last allocated id. Ids start at 1 and are never reused.
    last_id: u64,
    /// Sessions ordered by id, i.e. by connect order.
    sessions: BTreeMap<SessionId, Session>,
}

impl RegistryState {
    fn roster(&self) -> Vec<String> {
        self.sessions
            .values()
            .filter_map(|s| s.name())
            .map(str::to_string)
            .collect()
    }

    fn broadcast_roster(&self) -> usize {
        relay::broadcast_roster(self.sessions.values(), self.roster())
    }
}

/// Registry of live sessions shared by every connection handler.
#[derive(Default)]
pub struct SessionRegistry {
    state: RwLock<RegistryState>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new connection in the unnamed state.
    ///
    /// Returns the new session's id and the receiving end of its event
    /// queue. The session is not part of the roster until it joins.
    pub async fn connect(&self) -> (SessionId, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = SessionId::new(state.last_id);
        state.sessions.insert(id, Session::new(id, tx));
        drop(state);

        info!(session = %id, "Session connected");
        (id, rx)
    }

    /// Bind a display name to a session and broadcast the new roster.
    ///
    /// The name is trimmed; a blank name is rejected before the registry is
    /// touched. Joining again overwrites the previous name. Names need not
    /// be unique.
    pub async fn join(&self, id: SessionId, name: &str) -> Result<(), ChatError> {
        let name = validate_name(name)?;

        let mut state = self.state.write().await;
        let session = state
            .sessions
            .get_mut(&id)
            .ok_or(ChatError::InvalidSession(id))?;
        let previous = session.bind_name(name.to_string());
        let delivered = state.broadcast_roster();
        drop(state);

        match previous {
            Some(previous) => {
                info!(session = %id, %previous, display_name = name, "Session renamed")
            }
            None => info!(session = %id, display_name = name, "Session joined"),
        }
        debug!(delivered, "Roster broadcast after join");
        Ok(())
    }

    /// Remove a session, joined or not.
    ///
    /// Unknown ids are ignored. If the session had joined, the shrunken
    /// roster is broadcast to the remaining sessions.
    ///
    /// Returns true if a session was removed.
    pub async fn disconnect(&self, id: SessionId) -> bool {
        let mut state = self.state.write().await;
        let Some(session) = state.sessions.remove(&id) else {
            drop(state);
            debug!(session = %id, "Disconnect for unknown session ignored");
            return false;
        };
        if session.is_active() {
            let delivered = state.broadcast_roster();
            debug!(delivered, "Roster broadcast after disconnect");
        }
        drop(state);

        info!(
            session = %id,
            display_name = session.name().unwrap_or(""),
            "Session disconnected"
        );
        true
    }

    /// Send a message on behalf of a session.
    ///
    /// The author is the session's name at the moment of sending. The
    /// message goes to every joined session, the author included.
    ///
    /// Returns the number of sessions the message was queued for.
    pub async fn send_message(&self, id: SessionId, text: &str) -> Result<usize, ChatError> {
        let text = validate_message(text)?;

        let state = self.state.read().await;
        let session = state
            .sessions
            .get(&id)
            .ok_or(ChatError::InvalidSession(id))?;
        let author = session.name().ok_or(ChatError::NotJoined(id))?;
        let message = ChatMessage::new(author, text);
        Ok(relay::broadcast_message(state.sessions.values(), message))
    }

    /// Display names of all joined sessions, in connect order.
    pub async fn current_roster(&self) -> Vec<String> {
        self.state.read().await.roster()
    }

    /// Number of connected sessions, joined or not.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    /// Number of joined sessions.
    pub async fn active_count(&self) -> usize {
        self.state
            .read()
            .await
            .sessions
            .values()
            .filter(|s| s.is_active())
            .count()
    }
}
