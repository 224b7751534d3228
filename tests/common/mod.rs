//! Test helpers for end-to-end tests.
//!
//! Provides TestClient, a server launcher, and polling helpers.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use chatrelay::config::ServerConfig;
use chatrelay::{ChatServer, SessionRegistry};

/// Default timeout for test operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait before concluding that nothing more is coming.
pub const SILENCE: Duration = Duration::from_millis(200);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Start a server on a random local port.
pub async fn start_server() -> (SocketAddr, Arc<SessionRegistry>) {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
    };
    let server = ChatServer::new(&config).unwrap();
    let registry = server.registry();
    let addr = server.spawn().await.unwrap();
    (addr, registry)
}

/// Wait until the registry holds exactly `count` sessions.
pub async fn wait_for_sessions(registry: &SessionRegistry, count: usize) {
    timeout(DEFAULT_TIMEOUT, async {
        while registry.session_count().await != count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("Timeout waiting for {count} sessions"));
}

/// WebSocket test client.
pub struct TestClient {
    ws: WsStream,
}

impl TestClient {
    /// Connect to the chat endpoint.
    pub async fn connect(addr: SocketAddr) -> Self {
        let (ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
        Self { ws }
    }

    /// Send a JSON frame.
    pub async fn send_json(&mut self, value: Value) {
        self.ws.send(Message::Text(value.to_string())).await.unwrap();
    }

    /// Send a join intent.
    pub async fn join(&mut self, name: &str) {
        self.send_json(json!({"type": "join", "name": name})).await;
    }

    /// Send a message intent.
    pub async fn say(&mut self, text: &str) {
        self.send_json(json!({"type": "send_message", "text": text})).await;
    }

    /// Receive the next JSON frame.
    pub async fn recv_json(&mut self) -> Value {
        self.try_recv_json(DEFAULT_TIMEOUT)
            .await
            .expect("timeout waiting for message")
    }

    /// Receive the next JSON frame, or None if nothing arrives in time.
    pub async fn try_recv_json(&mut self, wait: Duration) -> Option<Value> {
        let ws = &mut self.ws;
        timeout(wait, async {
            loop {
                let msg = ws.next().await.expect("stream closed").expect("ws error");
                if let Message::Text(text) = msg {
                    return serde_json::from_str::<Value>(&text).unwrap();
                }
            }
        })
        .await
        .ok()
    }

    /// Receive frames until a roster update arrives and return its names.
    pub async fn recv_roster(&mut self) -> Vec<String> {
        loop {
            let msg = self.recv_json().await;
            if msg["type"] == "roster_updated" {
                return serde_json::from_value(msg["names"].clone()).unwrap();
            }
        }
    }

    /// Assert that no frame arrives within the silence window.
    pub async fn expect_silence(&mut self) {
        if let Some(msg) = self.try_recv_json(SILENCE).await {
            panic!("Expected no message, got {msg}");
        }
    }

    /// Close the connection.
    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
