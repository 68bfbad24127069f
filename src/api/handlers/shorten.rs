//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "alias": "abc123",        // optional
///   "expiration": "30 days",  // optional, defaults to the configured label
///   "user_id": "u1"           // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/abc123",
///   "original_url": "https://example.com",
///   "alias": "abc123",
///   "expiration": "30 days",
///   "created_at": "2026-01-01T12:00:00Z",
///   "short_code": "abc123"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `original_url` is empty or longer than 8192 characters
/// - 409 Conflict if the alias is already taken
/// - 500 Internal Server Error if no free random code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .shorten(
            payload.original_url,
            payload.alias,
            payload.expiration,
            payload.user_id,
        )
        .await?;

    let short_url = state.url_service.short_url(&record.short_code);

    Ok(Json(ShortenResponse::from_record(record, short_url)))
}
