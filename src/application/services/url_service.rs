//! URL shortening and owner listing service.

use std::sync::Arc;

use crate::application::services::code_allocator::{AllocationError, CodeAllocator};
use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Service for creating short URLs and listing them per owner.
///
/// Combines the [`CodeAllocator`] policy with an injected [`RecordStore`] and
/// builds public short URLs from the configured base URL.
pub struct UrlService {
    store: Arc<dyn RecordStore>,
    allocator: CodeAllocator,
    base_url: String,
    default_expiration: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is prepended verbatim to every short code.
    pub fn new(
        store: Arc<dyn RecordStore>,
        allocator: CodeAllocator,
        base_url: impl Into<String>,
        default_expiration: impl Into<String>,
    ) -> Self {
        Self {
            store,
            allocator,
            base_url: base_url.into(),
            default_expiration: default_expiration.into(),
        }
    }

    /// Shortens `original_url` and stores the resulting record.
    ///
    /// Blank `alias`, `expiration` and `owner_id` values count as absent.
    /// A missing expiration falls back to the configured default label.
    ///
    /// # Code Choice
    ///
    /// - With an alias: the alias is taken verbatim as the short code
    /// - Otherwise: a random code is drawn by the allocator
    ///
    /// The code is claimed with a single `insert_if_absent`. If another
    /// request claimed it between allocation and insertion, an alias request
    /// fails and a random request allocates again, for at most
    /// [`CodeAllocator::max_attempts`] rounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] if no free random code was found.
    pub async fn shorten(
        &self,
        original_url: String,
        alias: Option<String>,
        expiration: Option<String>,
        owner_id: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let new_url = NewUrl {
            original_url,
            alias: non_blank(alias),
            expiration: non_blank(expiration).unwrap_or_else(|| self.default_expiration.clone()),
            owner_id: non_blank(owner_id),
        };

        for round in 1..=self.allocator.max_attempts() {
            let code = self
                .allocator
                .allocate(new_url.alias.as_deref(), self.store.as_ref())
                .await?;

            let record = UrlRecord::new(code, new_url.clone());
            if self.store.insert_if_absent(record.clone()).await? {
                tracing::info!(
                    short_code = %record.short_code,
                    owner_id = ?record.owner_id,
                    aliased = record.alias.is_some(),
                    "Short URL created"
                );
                return Ok(record);
            }

            if let Some(alias) = &new_url.alias {
                tracing::debug!(%alias, "Alias claimed by a concurrent request");
                return Err(AllocationError::AliasTaken(alias.clone()).into());
            }

            tracing::warn!(round, code = %record.short_code, "Short code claimed concurrently, retrying");
        }

        Err(AllocationError::AllocationExhausted {
            attempts: self.allocator.max_attempts(),
        }
        .into())
    }

    /// Lists all records owned by `owner_id` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors. An unknown owner is
    /// not an error and yields an empty vector.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        self.store.list_by_owner(owner_id).await
    }

    /// Number of stored records.
    pub async fn record_count(&self) -> Result<usize, AppError> {
        self.store.count().await
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
