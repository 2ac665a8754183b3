//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};

use clientflow_core::progress::ProgressFlags;
use clientflow_core::types::{EntityId, Timestamp};

/// A client onboarding engagement record.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub industry: Option<String>,
    pub primary_contact_name: String,
    pub primary_contact_email: String,
    pub salesforce_edition: Option<String>,
    pub number_of_users: Option<String>,
    pub compliance_requirements: Vec<String>,
    pub service_package: Option<String>,
    pub zoho_contract_id: Option<String>,
    pub zoho_meeting_url: Option<String>,
    /// Next step to perform (1-4). Recomputed from the flags on every write;
    /// never accepted from callers.
    pub current_step: u8,
    pub contract_signed: bool,
    pub system_details_complete: bool,
    pub kickoff_scheduled: bool,
    pub resources_accessed: bool,
    pub created_at: Timestamp,
}

impl Client {
    /// The four completion flags as a value for the state machine.
    pub fn progress(&self) -> ProgressFlags {
        ProgressFlags {
            contract_signed: self.contract_signed,
            system_details_complete: self.system_details_complete,
            kickoff_scheduled: self.kickoff_scheduled,
            resources_accessed: self.resources_accessed,
        }
    }

    /// Recompute `current_step` from the flags.
    pub fn sync_step(&mut self) {
        self.current_step = self.progress().current_step();
    }

    /// Whether a non-blank meeting URL is on record.
    pub fn has_meeting_url(&self) -> bool {
        self.zoho_meeting_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// DTO for creating a client. Progress always starts at step 1 with all
/// flags false. The required string fields default to empty so that
/// missing-field and empty-field inputs fail the same validation check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[serde(default)]
    pub name: String,
    pub industry: Option<String>,
    #[serde(default)]
    pub primary_contact_name: String,
    #[serde(default)]
    pub primary_contact_email: String,
    pub salesforce_edition: Option<String>,
    pub number_of_users: Option<String>,
    #[serde(default)]
    pub compliance_requirements: Vec<String>,
    pub service_package: Option<String>,
    pub zoho_contract_id: Option<String>,
    pub zoho_meeting_url: Option<String>,
}

/// DTO for the raw PATCH merge. All fields optional; `currentStep` is
/// deliberately absent and recomputed server-side.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub salesforce_edition: Option<String>,
    pub number_of_users: Option<String>,
    pub compliance_requirements: Option<Vec<String>>,
    pub service_package: Option<String>,
    pub zoho_contract_id: Option<String>,
    pub zoho_meeting_url: Option<String>,
    pub contract_signed: Option<bool>,
    pub system_details_complete: Option<bool>,
    pub kickoff_scheduled: Option<bool>,
    pub resources_accessed: Option<bool>,
}

/// Fields merged by the contract-signing transition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFields {
    pub service_package: Option<String>,
    pub zoho_contract_id: Option<String>,
    pub zoho_meeting_url: Option<String>,
}

/// Fields merged by the system-survey transition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyFields {
    pub salesforce_edition: Option<String>,
    pub number_of_users: Option<String>,
    pub compliance_requirements: Option<Vec<String>>,
}
