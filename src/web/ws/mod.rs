//! WebSocket module for real-time communication.
//!
//! This module provides the WebSocket endpoint through which clients join,
//! send messages, and receive roster and message broadcasts.

pub mod chat;
pub mod messages;

pub use chat::{chat_ws_handler, ChatWsState};
pub use messages::{ClientMessage, ServerMessage};
