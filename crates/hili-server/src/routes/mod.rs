//! HTTP routes for the content API.
//!
//! One module per content type, plus the ping route. Response envelopes
//! are shared: lists are `{data, total}`, single items `{data}`.

use std::sync::Arc;

use axum::Router;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::AppState;

pub mod events;
pub mod links;
pub mod social;
pub mod sys;

/// Assemble the `/api` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/events", events::router())
        .nest("/links", links::router())
        .nest("/social-media", social::router())
        .merge(sys::router())
}

/// Envelope for list responses.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len();
        Self { data, total }
    }
}

/// Envelope for single-item responses.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub data: T,
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// `Option<Option<T>>` via serde default: `None` means the key was absent,
/// `Some(None)` means the client sent `null` to clear the field.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
