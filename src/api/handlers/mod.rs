//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod shorten;
pub mod urls;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use shorten::shorten_handler;
pub use urls::user_urls_handler;
