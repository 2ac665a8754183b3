//! In-memory record store for the three entity kinds.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use clientflow_core::catalog;
use clientflow_core::error::CoreError;
use clientflow_core::types::EntityId;

use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::models::integration::{
    CreateIntegrationStatus, IntegrationStatus, UpdateIntegrationStatus,
};
use crate::models::milestone::{CreateMilestone, ProjectMilestone};

#[derive(Default)]
struct Tables {
    clients: HashMap<EntityId, Client>,
    milestones: HashMap<EntityId, ProjectMilestone>,
    integrations: HashMap<EntityId, IntegrationStatus>,
}

/// In-memory record store.
///
/// A single `RwLock` guards the tables. Writes are serialized, which is what
/// gives [`RecordStore::update_client_guarded`] its check-and-mutate
/// guarantee: two racing transitions cannot both observe the pre-mutation
/// record. The store performs no cross-field invariant validation; that
/// belongs to the workflow engine.
#[derive(Default)]
pub struct RecordStore {
    tables: RwLock<Tables>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Clients
    // -----------------------------------------------------------------------

    /// Create a client with a fresh id, all progress flags false, and
    /// `currentStep` 1.
    pub async fn create_client(&self, input: CreateClient) -> Client {
        let client = Client {
            id: Uuid::new_v4(),
            name: input.name,
            industry: input.industry,
            primary_contact_name: input.primary_contact_name,
            primary_contact_email: input.primary_contact_email,
            salesforce_edition: input.salesforce_edition,
            number_of_users: input.number_of_users,
            compliance_requirements: input.compliance_requirements,
            service_package: input.service_package,
            zoho_contract_id: input.zoho_contract_id,
            zoho_meeting_url: input.zoho_meeting_url,
            current_step: 1,
            contract_signed: false,
            system_details_complete: false,
            kickoff_scheduled: false,
            resources_accessed: false,
            created_at: chrono::Utc::now(),
        };
        self.tables
            .write()
            .await
            .clients
            .insert(client.id, client.clone());
        client
    }

    pub async fn get_client(&self, id: EntityId) -> Option<Client> {
        self.tables.read().await.clients.get(&id).cloned()
    }

    /// All clients, in unspecified order.
    pub async fn list_clients(&self) -> Vec<Client> {
        self.tables.read().await.clients.values().cloned().collect()
    }

    /// Shallow field-level merge. `currentStep` is recomputed from the
    /// resulting flags rather than taken from the input; the store does not
    /// check flag monotonicity.
    pub async fn update_client(&self, id: EntityId, updates: UpdateClient) -> Option<Client> {
        let mut tables = self.tables.write().await;
        let client = tables.clients.get_mut(&id)?;

        if let Some(name) = updates.name {
            client.name = name;
        }
        if let Some(industry) = updates.industry {
            client.industry = Some(industry);
        }
        if let Some(contact) = updates.primary_contact_name {
            client.primary_contact_name = contact;
        }
        if let Some(email) = updates.primary_contact_email {
            client.primary_contact_email = email;
        }
        if let Some(edition) = updates.salesforce_edition {
            client.salesforce_edition = Some(edition);
        }
        if let Some(users) = updates.number_of_users {
            client.number_of_users = Some(users);
        }
        if let Some(requirements) = updates.compliance_requirements {
            client.compliance_requirements = requirements;
        }
        if let Some(package) = updates.service_package {
            client.service_package = Some(package);
        }
        if let Some(contract_id) = updates.zoho_contract_id {
            client.zoho_contract_id = Some(contract_id);
        }
        if let Some(meeting_url) = updates.zoho_meeting_url {
            client.zoho_meeting_url = Some(meeting_url);
        }
        if let Some(signed) = updates.contract_signed {
            client.contract_signed = signed;
        }
        if let Some(complete) = updates.system_details_complete {
            client.system_details_complete = complete;
        }
        if let Some(scheduled) = updates.kickoff_scheduled {
            client.kickoff_scheduled = scheduled;
        }
        if let Some(accessed) = updates.resources_accessed {
            client.resources_accessed = accessed;
        }

        client.sync_step();
        Some(client.clone())
    }

    /// Atomically check-and-mutate a client record.
    ///
    /// The closure receives a clone of the current record; only if it
    /// returns `Ok` is the mutated clone written back, under the same write
    /// lock that the check ran under. On `Err` nothing is written.
    pub async fn update_client_guarded<F>(
        &self,
        id: EntityId,
        mutate: F,
    ) -> Result<Client, CoreError>
    where
        F: FnOnce(&mut Client) -> Result<(), CoreError>,
    {
        let mut tables = self.tables.write().await;
        let current = tables
            .clients
            .get(&id)
            .ok_or(CoreError::NotFound {
                entity: "Client",
                id,
            })?;

        let mut next = current.clone();
        mutate(&mut next)?;
        next.sync_step();
        tables.clients.insert(id, next.clone());
        Ok(next)
    }

    // -----------------------------------------------------------------------
    // Project milestones
    // -----------------------------------------------------------------------

    /// Create a milestone under an existing client.
    pub async fn create_milestone(
        &self,
        client_id: EntityId,
        input: CreateMilestone,
    ) -> Result<ProjectMilestone, CoreError> {
        let mut tables = self.tables.write().await;
        if !tables.clients.contains_key(&client_id) {
            return Err(CoreError::NotFound {
                entity: "Client",
                id: client_id,
            });
        }

        let milestone = ProjectMilestone {
            id: Uuid::new_v4(),
            client_id,
            title: input.title,
            date: input.date,
            kind: input.kind,
            completed: input.completed,
        };
        tables.milestones.insert(milestone.id, milestone.clone());
        Ok(milestone)
    }

    /// All milestones owned by a client, in unspecified order.
    pub async fn milestones_for_client(&self, client_id: EntityId) -> Vec<ProjectMilestone> {
        self.tables
            .read()
            .await
            .milestones
            .values()
            .filter(|m| m.client_id == client_id)
            .cloned()
            .collect()
    }

    pub async fn set_milestone_completed(
        &self,
        id: EntityId,
        completed: bool,
    ) -> Option<ProjectMilestone> {
        let mut tables = self.tables.write().await;
        let milestone = tables.milestones.get_mut(&id)?;
        milestone.completed = completed;
        Some(milestone.clone())
    }

    /// The client's canonical kickoff milestone, if one exists.
    pub async fn kickoff_milestone(&self, client_id: EntityId) -> Option<ProjectMilestone> {
        self.tables
            .read()
            .await
            .milestones
            .values()
            .find(|m| m.client_id == client_id && m.kind == catalog::MILESTONE_KICKOFF)
            .cloned()
    }

    // -----------------------------------------------------------------------
    // Integration status
    // -----------------------------------------------------------------------

    /// Create an integration record under an existing client.
    pub async fn create_integration_status(
        &self,
        client_id: EntityId,
        input: CreateIntegrationStatus,
    ) -> Result<IntegrationStatus, CoreError> {
        let mut tables = self.tables.write().await;
        if !tables.clients.contains_key(&client_id) {
            return Err(CoreError::NotFound {
                entity: "Client",
                id: client_id,
            });
        }

        let status = IntegrationStatus {
            id: Uuid::new_v4(),
            client_id,
            slack_connected: input.slack_connected,
            zoho_connected: input.zoho_connected,
            n8n_connected: input.n8n_connected,
            slack_webhook_url: input.slack_webhook_url,
            n8n_webhook_url: input.n8n_webhook_url,
        };
        tables.integrations.insert(status.id, status.clone());
        Ok(status)
    }

    /// The integration record owned by a client (keyed by owning client, as
    /// there is one per client in practice).
    pub async fn integration_for_client(&self, client_id: EntityId) -> Option<IntegrationStatus> {
        self.tables
            .read()
            .await
            .integrations
            .values()
            .find(|s| s.client_id == client_id)
            .cloned()
    }

    /// Partial merge of a client's integration record.
    pub async fn update_integration_status(
        &self,
        client_id: EntityId,
        updates: UpdateIntegrationStatus,
    ) -> Option<IntegrationStatus> {
        let mut tables = self.tables.write().await;
        let status = tables
            .integrations
            .values_mut()
            .find(|s| s.client_id == client_id)?;

        if let Some(connected) = updates.slack_connected {
            status.slack_connected = connected;
        }
        if let Some(connected) = updates.zoho_connected {
            status.zoho_connected = connected;
        }
        if let Some(connected) = updates.n8n_connected {
            status.n8n_connected = connected;
        }
        if let Some(url) = updates.slack_webhook_url {
            status.slack_webhook_url = Some(url);
        }
        if let Some(url) = updates.n8n_webhook_url {
            status.n8n_webhook_url = Some(url);
        }

        Some(status.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
