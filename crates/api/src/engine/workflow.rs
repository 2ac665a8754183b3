//! Gated onboarding transitions.
//!
//! Each transition validates its preconditions and applies its mutation as
//! one atomic unit against the client's record, then publishes a domain
//! event. Precondition failures are typed rejections and leave the record
//! untouched; no transition is retried and none waits on outbound
//! notification delivery.

use std::sync::Arc;

use clientflow_core::error::CoreError;
use clientflow_core::progress;
use clientflow_core::types::EntityId;
use clientflow_events::{EventBus, OnboardingEvent};
use clientflow_store::models::client::{Client, ContractFields, SurveyFields};
use clientflow_store::RecordStore;

/// Drives clients through the four onboarding steps.
pub struct WorkflowEngine {
    store: Arc<RecordStore>,
    event_bus: Arc<EventBus>,
}

impl WorkflowEngine {
    pub fn new(store: Arc<RecordStore>, event_bus: Arc<EventBus>) -> Self {
        Self { store, event_bus }
    }

    /// Step 1: sign the service contract and record the selected package and
    /// external references.
    pub async fn sign_contract(
        &self,
        client_id: EntityId,
        fields: ContractFields,
    ) -> Result<Client, CoreError> {
        let updated = self
            .store
            .update_client_guarded(client_id, |client| {
                progress::check_sign_contract(client.progress())?;
                client.contract_signed = true;
                if let Some(package) = fields.service_package {
                    client.service_package = Some(package);
                }
                if let Some(contract_id) = fields.zoho_contract_id {
                    client.zoho_contract_id = Some(contract_id);
                }
                if let Some(meeting_url) = fields.zoho_meeting_url {
                    client.zoho_meeting_url = Some(meeting_url);
                }
                Ok(())
            })
            .await?;

        tracing::info!(client_id = %client_id, "Contract signed");
        self.publish(
            "client.contract_signed",
            &updated,
            format!("{} signed the service contract", updated.name),
        );
        Ok(updated)
    }

    /// Step 2: record the system survey answers.
    pub async fn complete_system_survey(
        &self,
        client_id: EntityId,
        fields: SurveyFields,
    ) -> Result<Client, CoreError> {
        let updated = self
            .store
            .update_client_guarded(client_id, |client| {
                progress::check_complete_survey(client.progress())?;
                client.system_details_complete = true;
                if let Some(edition) = fields.salesforce_edition {
                    client.salesforce_edition = Some(edition);
                }
                if let Some(users) = fields.number_of_users {
                    client.number_of_users = Some(users);
                }
                if let Some(requirements) = fields.compliance_requirements {
                    client.compliance_requirements = requirements;
                }
                Ok(())
            })
            .await?;

        tracing::info!(client_id = %client_id, "System survey completed");
        self.publish(
            "client.survey_completed",
            &updated,
            format!("{} completed the system survey", updated.name),
        );
        Ok(updated)
    }

    /// Step 3: schedule the kickoff meeting.
    ///
    /// Also marks the client's kickoff milestone completed, best-effort: a
    /// missing milestone is not an error and never rolls back the
    /// transition.
    pub async fn schedule_kickoff(&self, client_id: EntityId) -> Result<Client, CoreError> {
        let updated = self
            .store
            .update_client_guarded(client_id, |client| {
                progress::check_schedule_kickoff(client.progress(), client.has_meeting_url())?;
                client.kickoff_scheduled = true;
                Ok(())
            })
            .await?;

        if let Some(milestone) = self.store.kickoff_milestone(client_id).await {
            if !milestone.completed {
                let _ = self.store.set_milestone_completed(milestone.id, true).await;
                tracing::debug!(
                    client_id = %client_id,
                    milestone_id = %milestone.id,
                    "Kickoff milestone marked completed"
                );
            }
        }

        tracing::info!(client_id = %client_id, "Kickoff scheduled");
        self.publish(
            "client.kickoff_scheduled",
            &updated,
            format!("{} scheduled their kickoff meeting", updated.name),
        );
        Ok(updated)
    }

    /// Step 4: record that the client opened their resource library.
    pub async fn mark_resources_accessed(&self, client_id: EntityId) -> Result<Client, CoreError> {
        let updated = self
            .store
            .update_client_guarded(client_id, |client| {
                progress::check_mark_resources_accessed(client.progress())?;
                client.resources_accessed = true;
                Ok(())
            })
            .await?;

        tracing::info!(client_id = %client_id, "Resources accessed");
        self.publish(
            "client.resources_accessed",
            &updated,
            format!("{} accessed their resource library", updated.name),
        );
        Ok(updated)
    }

    fn publish(&self, event_type: &str, client: &Client, message: String) {
        self.event_bus.publish(
            OnboardingEvent::new(event_type, client.id, message).with_payload(serde_json::json!({
                "clientId": client.id,
                "currentStep": client.current_step,
                "status": client.progress().status_label(),
            })),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clientflow_store::models::client::CreateClient;
    use clientflow_store::models::milestone::CreateMilestone;
    use uuid::Uuid;

    fn test_engine() -> (Arc<RecordStore>, WorkflowEngine) {
        let store = Arc::new(RecordStore::new());
        let bus = Arc::new(EventBus::default());
        let engine = WorkflowEngine::new(Arc::clone(&store), bus);
        (store, engine)
    }

    async fn fresh_client(store: &RecordStore) -> Client {
        store
            .create_client(CreateClient {
                name: "Acme Health Systems".to_string(),
                industry: None,
                primary_contact_name: "Taylor Morgan".to_string(),
                primary_contact_email: "taylor@acmehealth.com".to_string(),
                salesforce_edition: None,
                number_of_users: None,
                compliance_requirements: vec![],
                service_package: None,
                zoho_contract_id: None,
                zoho_meeting_url: None,
            })
            .await
    }

    #[tokio::test]
    async fn sign_contract_merges_fields_and_advances() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        let updated = engine
            .sign_contract(
                client.id,
                ContractFields {
                    service_package: Some("Security Assessment Pro".to_string()),
                    zoho_contract_id: Some("CT-1042".to_string()),
                    zoho_meeting_url: None,
                },
            )
            .await
            .unwrap();

        assert!(updated.contract_signed);
        assert_eq!(updated.current_step, 2);
        assert_eq!(updated.service_package.as_deref(), Some("Security Assessment Pro"));
        assert_eq!(updated.zoho_contract_id.as_deref(), Some("CT-1042"));
    }

    #[tokio::test]
    async fn sign_contract_unknown_client_is_not_found() {
        let (_store, engine) = test_engine();
        let result = engine.sign_contract(Uuid::new_v4(), ContractFields::default()).await;
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn resigning_is_rejected() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        engine.sign_contract(client.id, ContractFields::default()).await.unwrap();
        let result = engine.sign_contract(client.id, ContractFields::default()).await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
    }

    #[tokio::test]
    async fn premature_survey_leaves_record_unchanged() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        let result = engine
            .complete_system_survey(
                client.id,
                SurveyFields {
                    salesforce_edition: Some("Enterprise".to_string()),
                    number_of_users: Some("500".to_string()),
                    compliance_requirements: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Precondition(_))));
        let fetched = store.get_client(client.id).await.unwrap();
        assert_eq!(fetched, client);
    }

    #[tokio::test]
    async fn kickoff_requires_survey_then_meeting_url() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        engine.sign_contract(client.id, ContractFields::default()).await.unwrap();

        // Survey not yet complete.
        let result = engine.schedule_kickoff(client.id).await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));

        engine
            .complete_system_survey(client.id, SurveyFields::default())
            .await
            .unwrap();

        // Survey complete but no meeting URL on record.
        let result = engine.schedule_kickoff(client.id).await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
    }

    #[tokio::test]
    async fn full_walkthrough_completes_kickoff_milestone() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;
        let milestone = store
            .create_milestone(
                client.id,
                CreateMilestone {
                    title: "Kickoff Meeting".to_string(),
                    date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                    kind: "kickoff".to_string(),
                    completed: false,
                },
            )
            .await
            .unwrap();

        engine
            .sign_contract(
                client.id,
                ContractFields {
                    service_package: Some("Security Assessment Pro".to_string()),
                    zoho_contract_id: None,
                    zoho_meeting_url: Some("https://meet.example.test/kickoff".to_string()),
                },
            )
            .await
            .unwrap();
        engine
            .complete_system_survey(client.id, SurveyFields::default())
            .await
            .unwrap();
        let after_kickoff = engine.schedule_kickoff(client.id).await.unwrap();
        assert!(after_kickoff.kickoff_scheduled);
        assert_eq!(after_kickoff.current_step, 4);

        let synced = store.milestones_for_client(client.id).await;
        assert!(synced.iter().any(|m| m.id == milestone.id && m.completed));

        let finished = engine.mark_resources_accessed(client.id).await.unwrap();
        assert!(finished.resources_accessed);
        assert_eq!(finished.current_step, 4);
        assert!(finished.progress().is_prefix_consistent());
        assert_eq!(finished.progress().status_label(), "Kickoff Scheduled");
    }

    #[tokio::test]
    async fn resources_require_scheduled_kickoff() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        let result = engine.mark_resources_accessed(client.id).await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
    }

    #[tokio::test]
    async fn concurrent_signing_yields_exactly_one_success() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        let (a, b) = tokio::join!(
            engine.sign_contract(client.id, ContractFields::default()),
            engine.sign_contract(client.id, ContractFields::default()),
        );

        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one of two racing calls may succeed");

        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(loser, Err(CoreError::Precondition(_))));

        let fetched = store.get_client(client.id).await.unwrap();
        assert!(fetched.contract_signed);
        assert_eq!(fetched.current_step, 2);
    }

    #[tokio::test]
    async fn transitions_keep_flags_monotonic() {
        let (store, engine) = test_engine();
        let client = fresh_client(&store).await;

        // Try every transition at every stage; after each attempt the stored
        // flags must still form a prefix.
        for _ in 0..4 {
            let _ = engine.sign_contract(client.id, ContractFields::default()).await;
            let _ = engine
                .complete_system_survey(client.id, SurveyFields::default())
                .await;
            let _ = engine.schedule_kickoff(client.id).await;
            let _ = engine.mark_resources_accessed(client.id).await;

            let fetched = store.get_client(client.id).await.unwrap();
            assert!(fetched.progress().is_prefix_consistent());
            assert_eq!(fetched.current_step, fetched.progress().current_step());
        }
    }
}
