//! Handlers for the gated onboarding transitions.
//!
//! Each step is an explicit operation with its own endpoint; out-of-order
//! calls return 409 with code `PRECONDITION_FAILED` and leave the record
//! unchanged.

use axum::extract::{Path, State};
use axum::Json;

use clientflow_core::types::EntityId;
use clientflow_store::models::client::{Client, ContractFields, SurveyFields};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/clients/{id}/sign-contract
pub async fn sign_contract(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<ContractFields>,
) -> AppResult<Json<Client>> {
    let client = state.engine.sign_contract(id, input).await?;
    Ok(Json(client))
}

/// POST /api/clients/{id}/complete-survey
pub async fn complete_survey(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<SurveyFields>,
) -> AppResult<Json<Client>> {
    let client = state.engine.complete_system_survey(id, input).await?;
    Ok(Json(client))
}

/// POST /api/clients/{id}/schedule-kickoff
pub async fn schedule_kickoff(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Client>> {
    let client = state.engine.schedule_kickoff(id).await?;
    Ok(Json(client))
}

/// POST /api/clients/{id}/mark-resources-accessed
pub async fn mark_resources_accessed(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Client>> {
    let client = state.engine.mark_resources_accessed(id).await?;
    Ok(Json(client))
}
