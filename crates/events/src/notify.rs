//! Fire-and-forget outbound webhook notifier.
//!
//! Subscribes to the event bus and forwards each event to the owning
//! client's configured Slack and n8n webhook URLs. Delivery is best-effort:
//! one attempt per URL, no retry, failures logged and swallowed. Nothing is
//! ever surfaced to the transition that published the event.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use clientflow_store::RecordStore;

use crate::bus::OnboardingEvent;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for a failed delivery attempt.
#[derive(Debug, thiserror::Error)]
enum NotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Forwards onboarding events to per-client webhook endpoints.
pub struct WebhookNotifier {
    store: Arc<RecordStore>,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a notifier with a pre-configured HTTP client.
    pub fn new(store: Arc<RecordStore>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { store, client }
    }

    /// Consume events until the bus closes.
    pub async fn run(self, mut events: broadcast::Receiver<OnboardingEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.forward(event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Webhook notifier lagged behind the event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::info!("Webhook notifier stopped (event bus closed)");
    }

    /// Forward one event to the owning client's configured channels.
    async fn forward(&self, event: OnboardingEvent) {
        let Some(status) = self.store.integration_for_client(event.client_id).await else {
            tracing::debug!(
                client_id = %event.client_id,
                event_type = %event.event_type,
                "No integration record; skipping outbound notification"
            );
            return;
        };

        if status.slack_connected {
            if let Some(url) = non_blank(status.slack_webhook_url.as_deref()) {
                // Slack incoming webhooks expect a `text` field.
                let payload = serde_json::json!({ "text": event.message });
                self.post("slack", url, &payload).await;
            }
        }

        if status.n8n_connected {
            if let Some(url) = non_blank(status.n8n_webhook_url.as_deref()) {
                let payload = serde_json::json!({
                    "event_type": event.event_type,
                    "client_id": event.client_id,
                    "payload": event.payload,
                    "timestamp": event.timestamp,
                });
                self.post("n8n", url, &payload).await;
            }
        }
    }

    /// One delivery attempt; failures are dropped after logging.
    async fn post(&self, channel: &'static str, url: &str, payload: &serde_json::Value) {
        match self.try_send(url, payload).await {
            Ok(()) => tracing::debug!(channel, url, "Outbound webhook delivered"),
            Err(e) => tracing::warn!(channel, url, error = %e, "Outbound webhook delivery failed"),
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, url: &str, payload: &serde_json::Value) -> Result<(), NotifyError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(NotifyError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
