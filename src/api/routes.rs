//! API route configuration.

use crate::api::handlers::stats_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /stats` - Cache hit / API call counters and cached count
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats_handler))
}
