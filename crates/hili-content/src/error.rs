//! Error types for `hili-content`.
//!
//! One enum per content type, mirroring the three stores. Display strings
//! are the exact messages the HTTP layer puts in `{error}` bodies, so they
//! are written for end users of the admin dashboard, not for operators.

use hili_store::StoreError;

use crate::social::Platform;

/// Errors from event catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// No event with the requested id.
    #[error("Event not found")]
    NotFound,

    /// The `type` field was not `series` or `event`.
    #[error("Invalid type '{value}'. Must be one of: series, event")]
    InvalidKind { value: String },

    /// The underlying repository failed.
    #[error("event store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from button link operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// No link with the requested id.
    #[error("Link not found")]
    NotFound,

    /// The underlying repository failed.
    #[error("link store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from social media link operations.
#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    /// No social media link with the requested id.
    #[error("Social media link not found")]
    NotFound,

    /// The platform value was not one of the six supported platforms.
    #[error("Invalid platform. Must be one of: {}", Platform::ALL_NAMES)]
    InvalidPlatform { value: String },

    /// A link for this platform already exists.
    #[error("Link for {platform} already exists")]
    AlreadyExists { platform: Platform },

    /// The underlying repository failed.
    #[error("social media store error: {0}")]
    Store(#[from] StoreError),
}
