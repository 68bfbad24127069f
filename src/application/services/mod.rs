//! Business logic services for the application layer.

pub mod code_allocator;
pub mod url_service;

pub use code_allocator::{AllocationError, CodeAllocator};
pub use url_service::UrlService;
