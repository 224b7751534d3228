//! Chat core for the relay.
//!
//! This module holds the only shared state in the system:
//! - The session registry (who is connected, who has joined)
//! - Broadcast fan-out of messages and roster updates
//! - Validation of join names and message bodies
//!
//! Transports talk to it through [`SessionRegistry`] and consume the
//! [`ChatEvent`]s queued for their connection.

mod error;
mod event;
pub mod registry;
pub mod relay;
mod session;
mod validation;

pub use error::ChatError;
pub use event::{ChatEvent, ChatMessage};
pub use registry::SessionRegistry;
pub use session::{EventReceiver, EventSender, Session, SessionId, SessionState};
pub use validation::{validate_message, validate_name};
