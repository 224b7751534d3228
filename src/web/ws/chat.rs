//! Chat WebSocket handler.
//!
//! One WebSocket connection is one session. The handler owns the socket and
//! the session's event queue; the registry only ever pushes onto the queue,
//! so a slow socket stalls nobody but its own connection.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};

use crate::chat::{SessionId, SessionRegistry};

use super::messages::{ClientMessage, ServerMessage};

/// State for WebSocket chat handler.
#[derive(Clone)]
pub struct ChatWsState {
    /// Session registry shared by all connections.
    pub registry: Arc<SessionRegistry>,
}

impl ChatWsState {
    /// Create a new chat WebSocket state.
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

/// WebSocket chat handler.
///
/// GET /ws
pub async fn chat_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ChatWsState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle a WebSocket connection until it closes.
async fn handle_socket(socket: WebSocket, state: Arc<ChatWsState>) {
    let (session_id, mut events) = state.registry.connect().await;
    let (mut ws_sender, mut ws_receiver) = socket.split();

    loop {
        tokio::select! {
            incoming = ws_receiver.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        let reply = handle_client_text(&state.registry, session_id, &text).await;
                        if let Some(reply) = reply {
                            if send_json(&mut ws_sender, &reply).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = ws_sender.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::debug!(session = %session_id, "WebSocket closed by client");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(session = %session_id, "WebSocket error: {}", e);
                        break;
                    }
                }
            }

            Some(event) = events.recv() => {
                let msg = ServerMessage::from(event);
                if send_json(&mut ws_sender, &msg).await.is_err() {
                    tracing::debug!(session = %session_id, "WebSocket write failed");
                    break;
                }
            }
        }
    }

    state.registry.disconnect(session_id).await;
}

/// Apply one text frame from the client.
///
/// Returns a reply for the sender only; broadcasts travel through the
/// registry.
async fn handle_client_text(
    registry: &SessionRegistry,
    session_id: SessionId,
    text: &str,
) -> Option<ServerMessage> {
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::debug!(session = %session_id, "Failed to parse client message: {}", e);
            return Some(ServerMessage::error("invalid_message", "Invalid message format"));
        }
    };

    let result = match msg {
        ClientMessage::Join { name } => registry.join(session_id, &name).await,
        ClientMessage::SendMessage { text } => {
            registry.send_message(session_id, &text).await.map(|_| ())
        }
        ClientMessage::Ping => return Some(ServerMessage::Pong),
    };

    match result {
        Ok(()) => None,
        Err(e) => {
            tracing::debug!(session = %session_id, "Rejected client intent: {}", e);
            Some(ServerMessage::from(&e))
        }
    }
}

async fn send_json(
    ws_sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(msg) {
        Ok(json) => ws_sender.send(Message::Text(json)).await,
        Err(e) => {
            tracing::warn!("Failed to serialize server message: {}", e);
            Ok(())
        }
    }
}
