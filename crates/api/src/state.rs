use std::sync::Arc;

use arden_core::catalog::ModelCatalog;
use arden_core::registry::SessionRegistry;
use arden_core::store::SceneStore;
use arden_events::EventBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Live AR sessions, keyed by scene id.
    pub registry: Arc<SessionRegistry>,
    /// Seeded furniture catalog.
    pub catalog: Arc<ModelCatalog>,
    /// Durable snapshot storage (in-memory by default).
    pub store: Arc<dyn SceneStore>,
    /// Centralized event bus for publishing scene events.
    pub event_bus: Arc<EventBus>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
