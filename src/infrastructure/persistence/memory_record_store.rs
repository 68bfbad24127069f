//! Process-local implementation of the record store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// In-memory record table, lost on restart.
///
/// Records live in a vector in insertion order, with a code-to-position
/// index beside it. Both sit behind one lock, so the existence check and the
/// write in [`RecordStore::insert_if_absent`] happen under a single guard.
#[derive(Default)]
pub struct MemoryRecordStore {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    records: Vec<UrlRecord>,
    index: HashMap<String, usize>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert_if_absent(&self, record: UrlRecord) -> Result<bool, AppError> {
        let mut table = self.inner.write().await;

        if table.index.contains_key(&record.short_code) {
            return Ok(false);
        }

        let position = table.records.len();
        table.index.insert(record.short_code.clone(), position);
        table.records.push(record);

        Ok(true)
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let table = self.inner.read().await;

        Ok(table
            .index
            .get(code)
            .map(|&position| table.records[position].clone()))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        let table = self.inner.read().await;

        Ok(table
            .records
            .iter()
            .filter(|record| record.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.read().await.records.len())
    }
}
