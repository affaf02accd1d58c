//! In-memory repository backend.
//!
//! Records live in a `Vec` behind a `RwLock`. Nothing is persistent — all
//! data is lost when the process exits, and the seed fixtures are the
//! effective factory-reset state. Insertion order is the storage order.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{ContentRecord, ContentRepository, StoreError};

/// An in-memory repository backed by a `Vec`.
///
/// Thread-safe and async-compatible. Cloning is cheap and clones share the
/// same underlying store.
///
/// # Examples
///
/// ```
/// # use hili_store::{ContentRecord, ContentRepository, MemoryRepository};
/// # #[derive(Clone)]
/// # struct Note { id: String }
/// # impl ContentRecord for Note {
/// #     fn id(&self) -> &str { &self.id }
/// # }
/// # #[tokio::main]
/// # async fn main() {
/// let repo = MemoryRepository::new();
/// repo.insert(Note { id: "1".to_owned() }).await.unwrap();
/// assert_eq!(repo.count().await.unwrap(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: ContentRecord> MemoryRepository<T> {
    /// Create a new empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-populated with the given records, in order.
    #[must_use]
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: ContentRecord> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T: ContentRecord> ContentRepository<T> for MemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn replace(&self, record: T) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|r| r.id() == id);
        Ok(index.map(|i| records.remove(i)))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let records = self.records.read().await;
        Ok(records.len())
    }
}
