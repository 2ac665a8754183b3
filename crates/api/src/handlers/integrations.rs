//! Handlers for a client's integration status.

use axum::extract::{Path, State};
use axum::Json;

use clientflow_core::channels::{channel_views, ChannelView};
use clientflow_core::error::CoreError;
use clientflow_core::types::EntityId;
use clientflow_store::models::integration::{IntegrationStatus, UpdateIntegrationStatus};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/clients/{id}/integrations
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<IntegrationStatus>> {
    let status = state
        .store
        .integration_for_client(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IntegrationStatus",
            id,
        }))?;
    Ok(Json(status))
}

/// PATCH /api/clients/{id}/integrations
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateIntegrationStatus>,
) -> AppResult<Json<IntegrationStatus>> {
    let status = state
        .store
        .update_integration_status(id, input)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IntegrationStatus",
            id,
        }))?;

    tracing::info!(client_id = %id, "Integration status updated");
    Ok(Json(status))
}

/// GET /api/clients/{id}/integrations/channels
///
/// Display triples for the three integration channels.
pub async fn channels(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<[ChannelView; 3]>> {
    let status = state
        .store
        .integration_for_client(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IntegrationStatus",
            id,
        }))?;
    Ok(Json(channel_views(status.connections())))
}
