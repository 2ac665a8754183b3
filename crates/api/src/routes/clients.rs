//! Route definitions for the `/clients` resource tree.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{clients, integrations, milestones, workflow};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/{id}",
            get(clients::get_by_id).patch(clients::update),
        )
        .route("/clients/{id}/summary", get(clients::summary))
        .route("/clients/{id}/calendar", get(clients::calendar_grid))
        .route(
            "/clients/{id}/milestones",
            get(milestones::list).post(milestones::create),
        )
        .route(
            "/clients/{id}/integrations",
            get(integrations::get).patch(integrations::update),
        )
        .route(
            "/clients/{id}/integrations/channels",
            get(integrations::channels),
        )
        .route("/clients/{id}/sign-contract", post(workflow::sign_contract))
        .route(
            "/clients/{id}/complete-survey",
            post(workflow::complete_survey),
        )
        .route(
            "/clients/{id}/schedule-kickoff",
            post(workflow::schedule_kickoff),
        )
        .route(
            "/clients/{id}/mark-resources-accessed",
            post(workflow::mark_resources_accessed),
        )
}
