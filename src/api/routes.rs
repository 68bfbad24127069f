//! API route configuration.

use crate::api::handlers::{shorten_handler, user_urls_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a short URL
/// - `GET  /urls/{user_id}`   - List the short URLs filed under an owner
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls/{user_id}", get(user_urls_handler))
}
