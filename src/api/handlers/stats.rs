//! Handler for GIF statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the hit/miss counters and the recent-list size.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// Reading statistics never touches the recent list.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store cannot be read.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.gif_service.stats().await?;

    Ok(Json(StatsResponse::new(stats, state.stats_enabled)))
}
