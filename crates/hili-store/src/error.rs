//! Storage error types.
//!
//! Every error variant carries enough context to diagnose the problem
//! without a debugger. The in-memory backend never produces these; they
//! exist so a persistent backend can slot in behind the same trait.

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read from the backend.
    #[error("failed to read record '{id}': {reason}")]
    Read { id: String, reason: String },

    /// Failed to write a record to the backend.
    #[error("failed to write record '{id}': {reason}")]
    Write { id: String, reason: String },

    /// Failed to delete a record from the backend.
    #[error("failed to delete record '{id}': {reason}")]
    Delete { id: String, reason: String },

    /// Failed to list records.
    #[error("failed to list records: {reason}")]
    List { reason: String },
}
