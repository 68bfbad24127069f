//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the record store answers
/// - **503 Service Unavailable**: the record store failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "record_store": { "status": "ok", "message": "records: 3" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_checks(HealthChecks {
        record_store: check_record_store(&state).await,
    });

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_record_store(state: &AppState) -> CheckStatus {
    match state.url_service.record_count().await {
        Ok(count) => CheckStatus::ok(format!("records: {count}")),
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            CheckStatus::error(e.to_string())
        }
    }
}
