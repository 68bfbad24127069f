//! Application layer services implementing business logic.
//!
//! Services consume the storage traits of the domain layer and expose a
//! small API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Alias vs. random short code policy
//! - [`services::url_service::UrlService`] - Short URL creation and owner listing

pub mod services;
