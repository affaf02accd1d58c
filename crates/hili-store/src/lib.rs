//! Repository abstraction for Hili content.
//!
//! This crate defines the [`ContentRepository`] trait — an ordered record
//! store interface that knows nothing about events, links, or validation
//! rules. The domain stores in `hili-content` wrap a repository to enforce
//! their invariants; swapping the backend never touches domain code.
//!
//! One implementation is provided:
//!
//! - [`MemoryRepository`] — process-memory `Vec`, the production backend for
//!   the landing-page API (state is deliberately discarded on restart) and
//!   the test backend everywhere else.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryRepository;

/// A record that can live in a [`ContentRepository`].
///
/// Records are identified by a string id that is unique within one
/// repository. Nothing here enforces uniqueness — id generation is the
/// domain layer's job.
pub trait ContentRecord: Clone + Send + Sync + 'static {
    /// The record's unique id.
    fn id(&self) -> &str;
}

/// A pluggable ordered record store for one content type.
///
/// Insertion order is preserved: [`list`](ContentRepository::list) returns
/// records in the order they were inserted, which is the natural order the
/// API exposes. Implementations must be safe to share across async tasks
/// (`Send + Sync`).
#[async_trait::async_trait]
pub trait ContentRepository<T: ContentRecord>: Send + Sync + 'static {
    /// Return all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying backend fails.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Retrieve a record by id.
    ///
    /// Returns `Ok(None)` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying backend fails.
    async fn get(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Append a record at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the underlying backend fails.
    async fn insert(&self, record: T) -> Result<(), StoreError>;

    /// Overwrite the record with the same id, keeping its position.
    ///
    /// Returns `Ok(false)` if no record has that id (nothing is written).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the underlying backend fails.
    async fn replace(&self, record: T) -> Result<bool, StoreError>;

    /// Remove a record by id, returning it.
    ///
    /// Returns `Ok(None)` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Delete`] if the underlying backend fails.
    async fn remove(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Number of records in the store.
    ///
    /// The default implementation calls [`list`](ContentRepository::list)
    /// and counts. Backends may override this with a cheaper check.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying backend fails.
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list().await?.len())
    }
}
