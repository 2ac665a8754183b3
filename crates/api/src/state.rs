use std::sync::Arc;

use clientflow_events::EventBus;
use clientflow_store::RecordStore;

use crate::config::ServerConfig;
use crate::engine::WorkflowEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is the
/// sole source of truth; the engine and handlers hold only derived views.
#[derive(Clone)]
pub struct AppState {
    /// The record store owning the canonical copy of every entity.
    pub store: Arc<RecordStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Event bus for publishing transition events.
    pub event_bus: Arc<EventBus>,
    /// Workflow engine driving the gated onboarding transitions.
    pub engine: Arc<WorkflowEngine>,
}
