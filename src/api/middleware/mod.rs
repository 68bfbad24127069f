//! HTTP middleware for request processing.
//!
//! - [`cors`] - Cross-origin policy
//! - [`tracing`] - Request/response logging

pub mod cors;
pub mod tracing;
