//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
///
/// `original_url` is stored as given; only its length is checked. The
/// other fields are opaque text.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 8192, message = "URL must be 1-8192 characters"))]
    pub original_url: String,

    /// Optional caller-chosen short code.
    pub alias: Option<String>,

    /// Free-form expiration label such as `"30 days"` or `"never"`.
    pub expiration: Option<String>,

    /// Owner the record is filed under for later listing.
    pub user_id: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub expiration: String,
    pub created_at: DateTime<Utc>,
    pub short_code: String,
}

impl ShortenResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            short_url,
            original_url: record.original_url,
            alias: record.alias,
            expiration: record.expiration,
            created_at: record.created_at,
            short_code: record.short_code,
        }
    }
}
