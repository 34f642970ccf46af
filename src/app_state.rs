//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{EventBus, RandomSource, SeededRandom, ThreadRandom};
use crate::service::DrawService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Draw service owning the participant registry.
    pub draw_service: Arc<DrawService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Builds the state with an explicit random source.
    #[must_use]
    pub fn new(random: Box<dyn RandomSource>, event_bus_capacity: usize) -> Self {
        let event_bus = EventBus::new(event_bus_capacity);
        let draw_service = Arc::new(DrawService::new(random, event_bus.clone()));
        Self {
            draw_service,
            event_bus,
        }
    }

    /// Builds the state described by `config`.
    ///
    /// A configured `DRAW_SEED` selects [`SeededRandom`]; otherwise draws
    /// use [`ThreadRandom`].
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let random: Box<dyn RandomSource> = match config.draw_seed {
            Some(seed) => {
                tracing::warn!(seed, "draws are seeded and therefore reproducible");
                Box::new(SeededRandom::new(seed))
            }
            None => Box::new(ThreadRandom::new()),
        };
        Self::new(random, config.event_bus_capacity)
    }
}
