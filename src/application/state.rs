// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::events::EventBus;
use crate::integrations::ArticClient;
use crate::repositories::{ArticPageSource, ArtworkPageSource};
use crate::services::SelectionService;
use crate::domain::PAGE_SIZE;
use crate::error::AppResult;

/// Application state shared with the rendering layer.
/// All fields are Arc-wrapped for sharing across commands.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub selection_service: Arc<SelectionService>,
}

impl AppState {
    pub fn new(event_bus: Arc<EventBus>, selection_service: Arc<SelectionService>) -> Self {
        Self {
            event_bus,
            selection_service,
        }
    }

    /// Wires the HTTP page source, the event bus and the selection service
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        let client = Arc::new(ArticClient::new(config)?);
        let source: Arc<dyn ArtworkPageSource> = Arc::new(ArticPageSource::new(client, PAGE_SIZE));
        let selection_service = Arc::new(SelectionService::new(source, event_bus.clone()));

        Ok(Self::new(event_bus, selection_service))
    }
}
