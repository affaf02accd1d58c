//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It owns the three domain stores, each wrapping
//! its own repository.

use std::sync::Arc;

use hili_content::event::{self, EventCatalog};
use hili_content::link::{self, LinkBoard};
use hili_content::social::{self, SocialDirectory};
use hili_store::MemoryRepository;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Creator series/events store.
    pub events: EventCatalog,
    /// Button link store.
    pub links: LinkBoard,
    /// Social media link store.
    pub social: SocialDirectory,
    /// Response for `GET /api/ping`.
    pub ping_message: String,
    /// Bearer token required on mutating requests, when set.
    pub admin_token: Option<String>,
}

impl AppState {
    /// State over empty in-memory repositories.
    #[must_use]
    pub fn empty(ping_message: String, admin_token: Option<String>) -> Self {
        Self {
            events: EventCatalog::new(Arc::new(MemoryRepository::new())),
            links: LinkBoard::new(Arc::new(MemoryRepository::new())),
            social: SocialDirectory::new(Arc::new(MemoryRepository::new())),
            ping_message,
            admin_token,
        }
    }

    /// State seeded with the fixture data — the factory-reset state the
    /// server boots with.
    #[must_use]
    pub fn seeded(ping_message: String, admin_token: Option<String>) -> Self {
        Self {
            events: EventCatalog::new(Arc::new(MemoryRepository::with_records(event::fixtures()))),
            links: LinkBoard::new(Arc::new(MemoryRepository::with_records(link::fixtures()))),
            social: SocialDirectory::new(Arc::new(MemoryRepository::with_records(
                social::fixtures(),
            ))),
            ping_message,
            admin_token,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
