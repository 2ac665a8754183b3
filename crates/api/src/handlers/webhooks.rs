//! Inbound webhook acknowledgement stubs.
//!
//! Slack and n8n call back into the portal; payloads are logged and
//! acknowledged, nothing more.

use axum::Json;
use serde_json::{json, Value};

/// POST /api/webhooks/slack
pub async fn slack(Json(payload): Json<Value>) -> Json<Value> {
    tracing::info!(payload = %payload, "Slack webhook received");
    Json(json!({ "success": true }))
}

/// POST /api/webhooks/n8n
pub async fn n8n(Json(payload): Json<Value>) -> Json<Value> {
    tracing::info!(payload = %payload, "n8n webhook received");
    Json(json!({ "success": true }))
}
