//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET /` - Random cat GIF page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
