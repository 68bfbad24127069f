//! DTOs for the owner listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A stored record as returned by `GET /api/urls/{user_id}`.
///
/// `id` always equals `short_code`.
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub id: String,
    pub short_code: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub expiration: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.short_code.clone(),
            short_code: record.short_code,
            original_url: record.original_url,
            alias: record.alias,
            expiration: record.expiration,
            user_id: record.owner_id,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewUrl;

    #[test]
    fn test_id_mirrors_short_code() {
        let record = UrlRecord::new(
            "abc123".to_string(),
            NewUrl {
                original_url: "https://example.com".to_string(),
                alias: Some("abc123".to_string()),
                expiration: "30 days".to_string(),
                owner_id: Some("u1".to_string()),
            },
        );

        let json = serde_json::to_value(UrlRecordResponse::from(record)).unwrap();

        assert_eq!(json["id"], "abc123");
        assert_eq!(json["short_code"], "abc123");
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["clicks"], 0);
        assert!(json["created_at"].is_string());
    }
}
