//! Project milestone entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientflow_core::types::EntityId;

/// A dated meeting or deliverable on a client's project calendar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMilestone {
    pub id: EntityId,
    pub client_id: EntityId,
    pub title: String,
    /// ISO calendar date, no time component. Not unique per client.
    pub date: NaiveDate,
    /// One of `clientflow_core::catalog::VALID_MILESTONE_KINDS`.
    #[serde(rename = "type")]
    pub kind: String,
    pub completed: bool,
}

/// DTO for creating a milestone under a client (the owning client id comes
/// from the request path).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestone {
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub completed: bool,
}
