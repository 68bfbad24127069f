//! Short code allocation policy.

use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Reasons a short code could not be allocated.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The requested alias is already used as a short code.
    #[error("Alias '{0}' is already taken")]
    AliasTaken(String),

    /// Random generation kept hitting occupied codes.
    #[error("No free short code found after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::AliasTaken(alias) => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            AllocationError::AllocationExhausted { attempts } => AppError::internal(
                "Failed to allocate a unique short code",
                json!({ "reason": "Too many collisions", "attempts": attempts }),
            ),
            AllocationError::Store(e) => e,
        }
    }
}

/// Chooses the short code for a new record.
///
/// Allocation only decides the code. It never writes to the store; the
/// caller claims the code with [`RecordStore::insert_if_absent`] right after.
#[derive(Debug, Clone)]
pub struct CodeAllocator {
    code_length: usize,
    max_attempts: usize,
}

impl CodeAllocator {
    pub const DEFAULT_CODE_LENGTH: usize = 8;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

    pub fn new(code_length: usize, max_attempts: usize) -> Self {
        Self {
            code_length,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Picks a short code, honouring `requested_alias` when given.
    ///
    /// With an alias the code is the alias itself, provided no record uses
    /// it yet. Without one, random codes are drawn until a free one turns up
    /// or `max_attempts` draws have collided.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::AliasTaken`] if the alias is occupied
    /// - [`AllocationError::AllocationExhausted`] if every random draw collided
    /// - [`AllocationError::Store`] if the store lookup fails
    pub async fn allocate(
        &self,
        requested_alias: Option<&str>,
        store: &dyn RecordStore,
    ) -> Result<String, AllocationError> {
        if let Some(alias) = requested_alias {
            if store.get(alias).await?.is_some() {
                return Err(AllocationError::AliasTaken(alias.to_string()));
            }
            return Ok(alias.to_string());
        }

        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if store.get(&code).await?.is_none() {
                return Ok(code);
            }

            tracing::debug!(attempt, %code, "Generated short code collided");
        }

        Err(AllocationError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for CodeAllocator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CODE_LENGTH, Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewUrl, UrlRecord};
    use crate::domain::repositories::MockRecordStore;

    fn existing_record(code: &str) -> UrlRecord {
        UrlRecord::new(
            code.to_string(),
            NewUrl {
                original_url: "https://other.com".to_string(),
                alias: Some(code.to_string()),
                expiration: "30 days".to_string(),
                owner_id: None,
            },
        )
    }

    #[tokio::test]
    async fn test_allocate_free_alias() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(None));

        let code = CodeAllocator::default()
            .allocate(Some("abc123"), &store)
            .await
            .unwrap();

        assert_eq!(code, "abc123");
    }

    #[tokio::test]
    async fn test_allocate_taken_alias() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .withf(|code| code == "taken")
            .times(1)
            .returning(|code| Ok(Some(existing_record(code))));

        let result = CodeAllocator::default().allocate(Some("taken"), &store).await;

        assert!(matches!(result, Err(AllocationError::AliasTaken(ref a)) if a == "taken"));
    }

    #[tokio::test]
    async fn test_allocate_random_code() {
        let mut store = MockRecordStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));

        let code = CodeAllocator::new(10, 5).allocate(None, &store).await.unwrap();

        assert_eq!(code.len(), 10);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_allocate_retries_on_collision() {
        let mut store = MockRecordStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_get()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|code| Ok(Some(existing_record(code))));
        store
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let code = CodeAllocator::default().allocate(None, &store).await.unwrap();

        assert_eq!(code.len(), CodeAllocator::DEFAULT_CODE_LENGTH);
    }

    #[tokio::test]
    async fn test_allocate_exhausted() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .times(3)
            .returning(|code| Ok(Some(existing_record(code))));

        let result = CodeAllocator::new(8, 3).allocate(None, &store).await;

        assert!(matches!(
            result,
            Err(AllocationError::AllocationExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_allocate_propagates_store_error() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let result = CodeAllocator::default().allocate(Some("abc"), &store).await;

        assert!(matches!(result, Err(AllocationError::Store(AppError::Internal { .. }))));
    }

    #[test]
    fn test_allocation_errors_map_to_app_errors() {
        let conflict: AppError = AllocationError::AliasTaken("abc".to_string()).into();
        assert!(matches!(conflict, AppError::Conflict { .. }));

        let exhausted: AppError = AllocationError::AllocationExhausted { attempts: 5 }.into();
        assert!(matches!(exhausted, AppError::Internal { .. }));
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        assert_eq!(CodeAllocator::new(8, 0).max_attempts(), 1);
    }
}
