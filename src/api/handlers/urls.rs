//! Handler for listing an owner's short URLs.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::urls::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every record filed under `user_id`, oldest first.
///
/// # Endpoint
///
/// `GET /api/urls/{user_id}`
///
/// # Response
///
/// A JSON array; each entry carries an `id` equal to its `short_code`.
/// An owner without records gets `[]`.
pub async fn user_urls_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordResponse>>, AppError> {
    let records = state.url_service.list_by_owner(&user_id).await?;

    tracing::debug!(%user_id, count = records.len(), "Listed owner URLs");

    Ok(Json(records.into_iter().map(UrlRecordResponse::from).collect()))
}
