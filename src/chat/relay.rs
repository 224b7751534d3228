//! Broadcast fan-out.
//!
//! Delivery is fire-and-forget: each recipient has its own unbounded queue,
//! so handing an event to one session never waits on another. A queue whose
//! receiver is gone belongs to a connection that is closing; it is skipped.

use tracing::trace;

use super::event::{ChatEvent, ChatMessage};
use super::session::Session;

/// Deliver a message to every active session, the author included.
///
/// Returns the number of sessions the message was queued for.
pub fn broadcast_message<'a, I>(sessions: I, message: ChatMessage) -> usize
where
    I: IntoIterator<Item = &'a Session>,
{
    fan_out(sessions, ChatEvent::MessageReceived(message))
}

/// Deliver the roster to every active session.
///
/// Returns the number of sessions the roster was queued for.
pub fn broadcast_roster<'a, I>(sessions: I, names: Vec<String>) -> usize
where
    I: IntoIterator<Item = &'a Session>,
{
    fan_out(sessions, ChatEvent::roster(names))
}

fn fan_out<'a, I>(sessions: I, event: ChatEvent) -> usize
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut delivered = 0;
    for session in sessions.into_iter().filter(|s| s.is_active()) {
        if session.deliver(event.clone()) {
            delivered += 1;
        } else {
            trace!(session = %session.id(), kind = event.kind(), "Skipped closed session");
        }
    }
    delivered
}
