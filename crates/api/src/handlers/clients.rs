//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use clientflow_core::calendar::{self, CalendarMilestone, MonthGrid};
use clientflow_core::catalog;
use clientflow_core::error::CoreError;
use clientflow_core::types::EntityId;
use clientflow_events::OnboardingEvent;
use clientflow_store::models::client::{Client, CreateClient, UpdateClient};
use clientflow_store::models::integration::CreateIntegrationStatus;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(state.store.list_clients().await))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Client>> {
    let client = state
        .store
        .get_client(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// POST /api/clients
///
/// Also creates the client's integration-status record so the integrations
/// panel works immediately for new engagements.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    catalog::validate_required("name", &input.name)?;
    catalog::validate_required("primaryContactName", &input.primary_contact_name)?;
    catalog::validate_required("primaryContactEmail", &input.primary_contact_email)?;

    let client = state.store.create_client(input).await;
    state
        .store
        .create_integration_status(client.id, CreateIntegrationStatus::default())
        .await?;

    tracing::info!(client_id = %client.id, name = %client.name, "Client created");
    state.event_bus.publish(OnboardingEvent::new(
        "client.created",
        client.id,
        format!("{} started onboarding", client.name),
    ));

    Ok((StatusCode::CREATED, Json(client)))
}

/// PATCH /api/clients/{id}
///
/// Raw field merge, distinct from the gated transitions. `currentStep` is
/// recomputed server-side and cannot be set by callers; flag monotonicity is
/// not enforced on this path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    if let Some(ref name) = input.name {
        catalog::validate_required("name", name)?;
    }
    if let Some(ref contact) = input.primary_contact_name {
        catalog::validate_required("primaryContactName", contact)?;
    }
    if let Some(ref email) = input.primary_contact_email {
        catalog::validate_required("primaryContactEmail", email)?;
    }

    let client = state
        .store
        .update_client(id, input)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

// ---------------------------------------------------------------------------
// GET /api/clients/{id}/summary
// ---------------------------------------------------------------------------

/// The client record plus its derived status label, as shown on the summary
/// card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    #[serde(flatten)]
    pub client: Client,
    pub status_label: &'static str,
}

pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ClientSummary>> {
    let client = state
        .store
        .get_client(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    let status_label = client.progress().status_label();
    Ok(Json(ClientSummary {
        client,
        status_label,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/clients/{id}/calendar
// ---------------------------------------------------------------------------

/// Query parameters for the calendar projection.
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub year: i32,
    pub month: u32,
}

/// Project the client's milestones onto a month grid.
pub async fn calendar_grid(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Query(params): Query<CalendarParams>,
) -> AppResult<Json<MonthGrid>> {
    state
        .store
        .get_client(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    let entries: Vec<(chrono::NaiveDate, CalendarMilestone)> = state
        .store
        .milestones_for_client(id)
        .await
        .into_iter()
        .map(|m| {
            (
                m.date,
                CalendarMilestone {
                    id: m.id,
                    title: m.title,
                    kind: m.kind,
                    completed: m.completed,
                },
            )
        })
        .collect();

    let grid = calendar::month_grid(params.year, params.month, &entries)?;
    Ok(Json(grid))
}
