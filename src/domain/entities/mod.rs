//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short code to URL mapping
//! - [`NewUrl`] - Caller input for creating a record, before a code is chosen

pub mod url_record;

pub use url_record::{NewUrl, UrlRecord};
