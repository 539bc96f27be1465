//! Random cat GIF page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::GifDelivery;
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the GIF page.
///
/// Renders `templates/index.html`. The statistics panel is only shown when a
/// store backs the page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct GifPageTemplate {
    pub gif_url: String,
    pub gif_source: &'static str,
    pub cache_hits: u64,
    pub api_calls: u64,
    pub cached_count: usize,
    pub capacity: usize,
    pub stats_enabled: bool,
}

impl GifPageTemplate {
    pub fn new(delivery: GifDelivery, stats_enabled: bool) -> Self {
        Self {
            gif_url: delivery.gif_url,
            gif_source: delivery.source.label(),
            cache_hits: delivery.stats.cache_hits,
            api_calls: delivery.stats.api_calls,
            cached_count: delivery.stats.cached_count,
            capacity: delivery.stats.capacity,
            stats_enabled,
        }
    }
}

/// Serves a cat GIF, reusing a recent one when the store has any.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Renders an HTML error page with 502 if the image provider fails and 503 if
/// the store is unavailable.
pub async fn index_handler(State(state): State<AppState>) -> Result<GifPageTemplate, PageError> {
    let delivery = state.gif_service.deliver().await?;

    Ok(GifPageTemplate::new(delivery, state.stats_enabled))
}
