//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`OnboardingEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application. The
//! workflow engine publishes after each successful transition; transitions
//! never wait on subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use clientflow_core::types::EntityId;

// ---------------------------------------------------------------------------
// OnboardingEvent
// ---------------------------------------------------------------------------

/// A domain event emitted when a client's onboarding advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingEvent {
    /// Dot-separated event name, e.g. `"client.contract_signed"`.
    pub event_type: String,

    /// The client the event concerns.
    pub client_id: EntityId,

    /// One-line human-readable summary, used as the chat notification text.
    pub message: String,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl OnboardingEvent {
    /// Create a new event with an empty payload.
    pub fn new(
        event_type: impl Into<String>,
        client_id: EntityId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            client_id,
            message: message.into(),
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`OnboardingEvent`].
pub struct EventBus {
    sender: broadcast::Sender<OnboardingEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// delivery is best-effort throughout.
    pub fn publish(&self, event: OnboardingEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<OnboardingEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
