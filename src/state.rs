use std::sync::Arc;

use crate::application::services::GifService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub gif_service: Arc<GifService>,
    /// Whether a store backs the page; the statistics panel is hidden otherwise.
    pub stats_enabled: bool,
}

impl AppState {
    pub fn new(gif_service: Arc<GifService>, stats_enabled: bool) -> Self {
        Self {
            gif_service,
            stats_enabled,
        }
    }
}
