//! Storage trait for URL records.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for URL records keyed by short code.
///
/// `insert_if_absent` is the only mutation. Implementations must perform its
/// existence check and write as one atomic step so that two concurrent
/// callers can never both claim the same code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRecordStore`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores `record` under `record.short_code` unless that code is taken.
    ///
    /// Returns `Ok(true)` if the record was inserted and `Ok(false)` if the
    /// code was already present. An existing record is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn insert_if_absent(&self, record: UrlRecord) -> Result<bool, AppError>;

    /// Looks up a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists every record filed under `owner_id`, in insertion order.
    ///
    /// An owner without records yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
