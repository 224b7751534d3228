//! Web module for the chat relay.
//!
//! This module serves the WebSocket endpoint clients chat through, plus a
//! health check.

pub mod middleware;
pub mod router;
pub mod server;
pub mod ws;

pub use router::create_router;
pub use server::ChatServer;
