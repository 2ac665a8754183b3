//! Route definitions for inbound webhook stubs.

use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/webhooks/slack", post(webhooks::slack))
        .route("/webhooks/n8n", post(webhooks::n8n))
}
