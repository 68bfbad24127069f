//! URL record entity representing one shortening mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its destination.
///
/// Records are created once, at successful allocation, and never updated.
/// `expiration` is a free-form label kept as metadata only; nothing parses
/// or enforces it. `clicks` starts at zero and nothing in this service
/// increments it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub expiration: String,
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl UrlRecord {
    /// Builds a fresh record stamped with the current time and zero clicks.
    pub fn new(short_code: String, new_url: NewUrl) -> Self {
        Self {
            short_code,
            original_url: new_url.original_url,
            alias: new_url.alias,
            expiration: new_url.expiration,
            owner_id: new_url.owner_id,
            created_at: Utc::now(),
            clicks: 0,
        }
    }

    /// Returns true if the record is filed under `owner_id`.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id.as_deref() == Some(owner_id)
    }
}

/// Input data for shortening a URL, before a short code is chosen.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub original_url: String,
    pub alias: Option<String>,
    pub expiration: String,
    pub owner_id: Option<String>,
}
