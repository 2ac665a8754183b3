//! Demo engagement seeding.
//!
//! Creates the sample client, its project milestones, and its integration
//! record so the onboarding portal has something to show on first run.

use chrono::NaiveDate;

use clientflow_core::catalog::{MILESTONE_DELIVERY, MILESTONE_KICKOFF, MILESTONE_REVIEW};
use clientflow_core::error::CoreError;

use crate::models::client::{Client, CreateClient};
use crate::models::integration::CreateIntegrationStatus;
use crate::models::milestone::CreateMilestone;
use crate::RecordStore;

/// Seed the demo engagement and return the created client.
pub async fn seed_demo_data(store: &RecordStore) -> Result<Client, CoreError> {
    let client = store
        .create_client(CreateClient {
            name: "Acme Health Systems".to_string(),
            industry: Some("Healthcare Technology".to_string()),
            primary_contact_name: "Taylor Morgan".to_string(),
            primary_contact_email: "taylor@acmehealth.com".to_string(),
            salesforce_edition: Some("Professional".to_string()),
            number_of_users: Some("150".to_string()),
            compliance_requirements: vec![
                "HIPAA".to_string(),
                "SOC 2".to_string(),
                "GDPR".to_string(),
            ],
            service_package: Some("Security Assessment Pro".to_string()),
            zoho_contract_id: None,
            zoho_meeting_url: None,
        })
        .await;

    let milestones = [
        ("Kickoff Meeting", "2025-01-15", MILESTONE_KICKOFF),
        ("Security Review", "2025-01-22", MILESTONE_REVIEW),
        ("Final Delivery", "2025-01-29", MILESTONE_DELIVERY),
    ];
    for (title, date, kind) in milestones {
        let date: NaiveDate = date.parse().map_err(|e| {
            CoreError::Internal(format!("Invalid seed milestone date '{date}': {e}"))
        })?;
        store
            .create_milestone(
                client.id,
                CreateMilestone {
                    title: title.to_string(),
                    date,
                    kind: kind.to_string(),
                    completed: false,
                },
            )
            .await?;
    }

    store
        .create_integration_status(
            client.id,
            CreateIntegrationStatus {
                slack_connected: true,
                zoho_connected: true,
                n8n_connected: true,
                slack_webhook_url: None,
                n8n_webhook_url: None,
            },
        )
        .await?;

    Ok(client)
}
