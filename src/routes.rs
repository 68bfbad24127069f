//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (record store)
//! - `/api/*`         - Shorten and owner listing endpoints
//!
//! Unknown paths get a JSON `not_found` error.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable origin policy
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed CORS origins; empty or `*` allows any
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
