//! Integration status entity model and DTOs.

use serde::{Deserialize, Serialize};

use clientflow_core::channels::ConnectionFlags;
use clientflow_core::types::EntityId;

/// Stored connection state for a client's external integrations.
///
/// The booleans are informational: they record what was last written, never
/// gate a transition, and are not health-checked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationStatus {
    pub id: EntityId,
    pub client_id: EntityId,
    pub slack_connected: bool,
    pub zoho_connected: bool,
    pub n8n_connected: bool,
    pub slack_webhook_url: Option<String>,
    pub n8n_webhook_url: Option<String>,
}

impl IntegrationStatus {
    /// The connection booleans as a value for the display projection.
    pub fn connections(&self) -> ConnectionFlags {
        ConnectionFlags {
            slack_connected: self.slack_connected,
            zoho_connected: self.zoho_connected,
            n8n_connected: self.n8n_connected,
        }
    }
}

/// DTO for creating an integration record alongside a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntegrationStatus {
    #[serde(default)]
    pub slack_connected: bool,
    #[serde(default)]
    pub zoho_connected: bool,
    #[serde(default)]
    pub n8n_connected: bool,
    pub slack_webhook_url: Option<String>,
    pub n8n_webhook_url: Option<String>,
}

/// DTO for the partial-merge update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationStatus {
    pub slack_connected: Option<bool>,
    pub zoho_connected: Option<bool>,
    pub n8n_connected: Option<bool>,
    pub slack_webhook_url: Option<String>,
    pub n8n_webhook_url: Option<String>,
}
