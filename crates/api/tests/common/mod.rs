use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clientflow_api::config::ServerConfig;
use clientflow_api::engine::WorkflowEngine;
use clientflow_api::router::build_app_router;
use clientflow_api::state::AppState;
use clientflow_events::EventBus;
use clientflow_store::RecordStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Each call produces an isolated
/// store, so tests never share state.
pub fn build_test_app() -> Router {
    let config = test_config();
    let store = Arc::new(RecordStore::new());
    let event_bus = Arc::new(EventBus::default());
    let engine = Arc::new(WorkflowEngine::new(
        Arc::clone(&store),
        Arc::clone(&event_bus),
    ));

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        event_bus,
        engine,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a JSON request with the given method and body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a client via the API and return its JSON representation.
pub async fn create_client(app: &Router, name: &str) -> serde_json::Value {
    let response = send_json(
        app,
        Method::POST,
        "/api/clients",
        serde_json::json!({
            "name": name,
            "industry": "Healthcare Technology",
            "primaryContactName": "Taylor Morgan",
            "primaryContactEmail": "taylor@acmehealth.com",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
