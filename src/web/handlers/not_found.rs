//! Fallback for unknown paths.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;
use crate::web::error::PageError;

/// Renders the HTML 404 page for any path without a route.
pub async fn not_found_handler(uri: Uri) -> PageError {
    PageError(AppError::not_found(
        "There is no cat at this address",
        json!({ "path": uri.path() }),
    ))
}
