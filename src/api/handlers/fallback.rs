//! Handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths with the standard JSON error body.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
