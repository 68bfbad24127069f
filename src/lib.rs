//! # Shortly
//!
//! A small URL shortening service built with Axum.
//!
//! A caller posts a long URL, optionally with an alias, an expiration label
//! and an owner id. The service picks a short code (the alias, or a random
//! token), stores the record and answers with the short URL. Records filed
//! under an owner can be listed later.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the record store contract
//! - **Application Layer** ([`application`]) - Code allocation and the URL service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory record store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /api/shorten` - Create a short URL
//! - `GET  /api/urls/{user_id}` - List an owner's short URLs
//! - `GET  /health` - Health check
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AllocationError, CodeAllocator, UrlService};
    pub use crate::domain::entities::{NewUrl, UrlRecord};
    pub use crate::domain::repositories::RecordStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryRecordStore;
    pub use crate::state::AppState;
}
