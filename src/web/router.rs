//! Router configuration for the web server.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::chat::SessionRegistry;

use super::middleware::create_cors_layer;
use super::ws::{chat_ws_handler, ChatWsState};

/// Create the main router.
pub fn create_router(registry: Arc<SessionRegistry>, cors_origins: &[String]) -> Router {
    let ws_state = Arc::new(ChatWsState::new(registry));

    Router::new()
        .route("/ws", get(chat_ws_handler))
        .with_state(ws_state)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let router = create_router(Arc::new(SessionRegistry::new()), &[]);

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_ws_requires_upgrade() {
        let router = create_router(Arc::new(SessionRegistry::new()), &[]);

        let response = router
            .oneshot(Request::get("/ws").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let router = create_router(Arc::new(SessionRegistry::new()), &[]);

        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
