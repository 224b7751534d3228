//! Chat relay
//!
//! A realtime chat relay: clients connect over WebSocket, join under a
//! display name, and exchange messages broadcast to everyone online while
//! watching a live roster.

pub mod chat;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use chat::{ChatError, ChatEvent, ChatMessage, SessionId, SessionRegistry};
pub use config::Config;
pub use error::{RelayError, Result};
pub use web::ChatServer;
