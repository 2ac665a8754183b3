//! Clientflow event bus and outbound notification infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`OnboardingEvent`] — the canonical domain event envelope.
//! - [`WebhookNotifier`] — fire-and-forget forwarding of events to each
//!   client's configured Slack and n8n webhook URLs.

pub mod bus;
pub mod notify;

pub use bus::{EventBus, OnboardingEvent};
pub use notify::WebhookNotifier;
