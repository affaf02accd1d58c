//! Request payloads and response envelopes for the Hili client.
//!
//! Record types come from `hili-content`; these are the write-side shapes.

use serde::{Deserialize, Serialize};

use hili_content::event::EventKind;
use hili_content::social::Platform;

/// Payload for `POST /api/events`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
}

impl CreateEvent {
    /// A payload with just the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            description: description.into(),
            tags: None,
            gradient: None,
            icon: None,
            poster: None,
            ticket_url: None,
        }
    }
}

/// Payload for `PUT /api/events/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
}

/// Payload for `POST /api/links`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLink {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Payload for `PUT /api/links/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// One entry of `POST /api/links/reorder`.
#[derive(Debug, Clone, Serialize)]
pub struct LinkPosition {
    pub id: String,
    pub position: i64,
}

/// Payload for `POST /api/social-media`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSocialLink {
    pub platform: Platform,
    pub url: String,
}

/// Payload for `PUT /api/social-media/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSocialLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// --- Internal API response types ---

#[derive(Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[allow(dead_code)]
    pub total: usize,
}

#[derive(Deserialize)]
pub(crate) struct ItemEnvelope<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub(crate) struct PingEnvelope {
    pub message: String,
}

#[derive(Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<String>,
}
