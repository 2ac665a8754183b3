//! HTTP handlers, one module per resource.

pub mod clients;
pub mod integrations;
pub mod milestones;
pub mod webhooks;
pub mod workflow;
