//! Route tree definitions.

pub mod clients;
pub mod health;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /clients                               list (GET), create (POST)
/// /clients/{id}                          get, raw field merge (PATCH)
/// /clients/{id}/summary                  client + derived status label
/// /clients/{id}/calendar                 month-grid projection
/// /clients/{id}/milestones               list, create
/// /clients/{id}/integrations             get, partial merge (PATCH)
/// /clients/{id}/integrations/channels    display triples
/// /clients/{id}/sign-contract            transition (POST)
/// /clients/{id}/complete-survey          transition (POST)
/// /clients/{id}/schedule-kickoff         transition (POST)
/// /clients/{id}/mark-resources-accessed  transition (POST)
/// /webhooks/slack                        inbound ack stub (POST)
/// /webhooks/n8n                          inbound ack stub (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(clients::router())
        .merge(webhooks::router())
}
