//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET /`          - Random cat GIF page
//! - `GET /health`    - Health check: store connectivity
//! - `GET /api/stats` - Counters as JSON
//!
//! Any other path renders the HTML 404 page.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application routes without rate limiting or path
/// normalization.
///
/// Used directly by tests, which run without a peer socket address.
pub fn base_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter, see [`crate::api::middleware::rate_limit::layer`]
pub fn app_router(state: AppState, rate_limit: RateLimitLayer) -> NormalizePath<Router> {
    let router = base_router(state).layer(rate_limit);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
