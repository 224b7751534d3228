//! Web server for the chat relay.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::chat::SessionRegistry;
use crate::config::ServerConfig;
use crate::Result;

use super::router::create_router;

/// WebSocket chat server.
pub struct ChatServer {
    /// Server address.
    addr: SocketAddr,
    /// CORS allowed origins.
    cors_origins: Vec<String>,
    /// Session registry shared by all connections.
    registry: Arc<SessionRegistry>,
}

impl ChatServer {
    /// Create a new server with an empty registry.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            addr: config.socket_addr()?,
            cors_origins: config.cors_origins.clone(),
            registry: Arc::new(SessionRegistry::new()),
        })
    }

    /// Use an existing session registry.
    pub fn with_registry(mut self, registry: Arc<SessionRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the session registry.
    pub fn registry(&self) -> Arc<SessionRegistry> {
        Arc::clone(&self.registry)
    }

    fn router(&self) -> Router {
        create_router(Arc::clone(&self.registry), &self.cors_origins)
    }

    async fn bind(&self) -> Result<(TcpListener, SocketAddr)> {
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Chat server listening on http://{}", local_addr);
        Ok((listener, local_addr))
    }

    /// Run the server until `shutdown` completes.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let (listener, _) = self.bind().await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Chat server stopped");
        Ok(())
    }

    /// Run the server in a background task and return the bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn spawn(self) -> Result<SocketAddr> {
        let router = self.router();
        let (listener, local_addr) = self.bind().await?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Chat server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
