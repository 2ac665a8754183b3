//! Handlers for a client's project milestones.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use clientflow_core::catalog;
use clientflow_core::types::EntityId;
use clientflow_store::models::milestone::{CreateMilestone, ProjectMilestone};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/clients/{id}/milestones
///
/// An unknown client yields an empty list rather than a 404.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Vec<ProjectMilestone>>> {
    Ok(Json(state.store.milestones_for_client(id).await))
}

/// POST /api/clients/{id}/milestones
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<CreateMilestone>,
) -> AppResult<(StatusCode, Json<ProjectMilestone>)> {
    catalog::validate_required("title", &input.title)?;
    catalog::validate_milestone_kind(&input.kind)?;

    let milestone = state.store.create_milestone(id, input).await?;

    tracing::info!(
        client_id = %id,
        milestone_id = %milestone.id,
        kind = %milestone.kind,
        "Milestone created"
    );
    Ok((StatusCode::CREATED, Json(milestone)))
}
