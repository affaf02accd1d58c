//! Creator series and events.
//!
//! The landing page's showcase section lists recurring series and one-off
//! events. Records carry presentation hints (gradient token, icon emoji,
//! optional poster) that the admin dashboard edits directly.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use hili_store::{ContentRecord, ContentRepository};

use crate::error::EventError;
use crate::id::IdGenerator;

/// Default gradient token applied when a create payload omits one.
pub const DEFAULT_GRADIENT: &str = "from-primary/30 to-secondary/20";

/// Default icon applied when a create payload omits one.
pub const DEFAULT_ICON: &str = "📺";

/// Whether a record is a recurring series or a one-off event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Series,
    Event,
}

impl EventKind {
    /// Parse a wire value (`"series"` or `"event"`).
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidKind`] for any other value.
    pub fn parse(value: &str) -> Result<Self, EventError> {
        match value {
            "series" => Ok(Self::Series),
            "event" => Ok(Self::Event),
            other => Err(EventError::InvalidKind {
                value: other.to_owned(),
            }),
        }
    }

    /// The wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Event => "event",
        }
    }
}

/// A creator series or event as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
    pub tags: Vec<String>,
    pub gradient: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for CreatorEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A validated create payload. Required fields are already present;
/// the catalog fills in defaults for the rest.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub kind: EventKind,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub gradient: Option<String>,
    pub icon: Option<String>,
    pub poster: Option<String>,
    pub ticket_url: Option<String>,
}

/// A partial update. `None` fields are left untouched. `poster` and
/// `ticket_url` are doubly optional so a patch can clear them explicitly.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub kind: Option<EventKind>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub gradient: Option<String>,
    pub icon: Option<String>,
    pub poster: Option<Option<String>>,
    pub ticket_url: Option<Option<String>>,
}

/// The event store: CRUD over an injected repository.
pub struct EventCatalog {
    repo: Arc<dyn ContentRepository<CreatorEvent>>,
    ids: IdGenerator,
}

impl EventCatalog {
    /// Create a catalog over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn ContentRepository<CreatorEvent>>) -> Self {
        Self {
            repo,
            ids: IdGenerator::new(),
        }
    }

    /// All events in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Store`] if the repository fails.
    pub async fn list(&self) -> Result<Vec<CreatorEvent>, EventError> {
        Ok(self.repo.list().await?)
    }

    /// Look up one event by id.
    ///
    /// # Errors
    ///
    /// [`EventError::NotFound`] if the id is unknown.
    pub async fn get(&self, id: &str) -> Result<CreatorEvent, EventError> {
        self.repo.get(id).await?.ok_or(EventError::NotFound)
    }

    /// Create an event, applying defaults and appending it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Store`] if the repository fails.
    pub async fn create(&self, new: NewEvent) -> Result<CreatorEvent, EventError> {
        let now = Utc::now();
        let event = CreatorEvent {
            id: self.ids.next_id(),
            title: new.title,
            kind: new.kind,
            description: new.description,
            tags: new.tags.unwrap_or_default(),
            gradient: new.gradient.unwrap_or_else(|| DEFAULT_GRADIENT.to_owned()),
            icon: new.icon.unwrap_or_else(|| DEFAULT_ICON.to_owned()),
            poster: new.poster,
            ticket_url: new.ticket_url,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(event.clone()).await?;
        info!(id = %event.id, kind = event.kind.as_str(), "event created");
        Ok(event)
    }

    /// Merge a partial update over an existing event.
    ///
    /// Only fields present in the patch change; `updated_at` always
    /// refreshes, even for an empty patch.
    ///
    /// # Errors
    ///
    /// [`EventError::NotFound`] if the id is unknown.
    pub async fn update(&self, id: &str, patch: EventPatch) -> Result<CreatorEvent, EventError> {
        let mut event = self.get(id).await?;

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(kind) = patch.kind {
            event.kind = kind;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(tags) = patch.tags {
            event.tags = tags;
        }
        if let Some(gradient) = patch.gradient {
            event.gradient = gradient;
        }
        if let Some(icon) = patch.icon {
            event.icon = icon;
        }
        if let Some(poster) = patch.poster {
            event.poster = poster;
        }
        if let Some(ticket_url) = patch.ticket_url {
            event.ticket_url = ticket_url;
        }
        event.updated_at = Utc::now();

        if !self.repo.replace(event.clone()).await? {
            return Err(EventError::NotFound);
        }
        info!(id = %event.id, "event updated");
        Ok(event)
    }

    /// Remove an event, returning the removed record.
    ///
    /// # Errors
    ///
    /// [`EventError::NotFound`] if the id is unknown.
    pub async fn delete(&self, id: &str) -> Result<CreatorEvent, EventError> {
        let removed = self.repo.remove(id).await?.ok_or(EventError::NotFound)?;
        info!(id = %removed.id, "event deleted");
        Ok(removed)
    }
}

impl std::fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCatalog").finish_non_exhaustive()
    }
}

/// Fixture events for the factory-reset state.
#[must_use]
pub fn fixtures() -> Vec<CreatorEvent> {
    let now = Utc::now();
    let event = |id: &str,
                 title: &str,
                 kind: EventKind,
                 description: &str,
                 tags: &[&str],
                 gradient: &str,
                 icon: &str,
                 ticket_url: Option<&str>| CreatorEvent {
        id: id.to_owned(),
        title: title.to_owned(),
        kind,
        description: description.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        gradient: gradient.to_owned(),
        icon: icon.to_owned(),
        poster: None,
        ticket_url: ticket_url.map(str::to_owned),
        created_at: now,
        updated_at: now,
    };

    vec![
        event(
            "1",
            "Creator Spotlight Live",
            EventKind::Series,
            "Weekly live shows featuring East Africa's most talented creators bringing stories to life.",
            &["Live", "Creator-Led", "Weekly"],
            "from-primary/30 to-secondary/20",
            "🎬",
            None,
        ),
        event(
            "2",
            "Festival Live Coverage",
            EventKind::Event,
            "Real-time broadcast of major cultural festivals across East Africa with exclusive behind-the-scenes content.",
            &["Live Event", "Cultural", "Exclusive"],
            "from-secondary/30 to-primary/20",
            "🎉",
            Some("https://example.com/tickets/festival"),
        ),
        event(
            "3",
            "Music & Motion Nights",
            EventKind::Series,
            "A digital-first music and performance series celebrating African artists and emerging talent.",
            &["Music", "Performance", "Digital"],
            "from-yellow-500/20 to-primary/20",
            "🎵",
            None,
        ),
        event(
            "4",
            "Community Conversations",
            EventKind::Event,
            "Intimate roundtable discussions bringing creators, community leaders, and influencers together.",
            &["Community", "Live", "Dialogue"],
            "from-primary/25 to-yellow-500/15",
            "💬",
            Some("https://example.com/tickets/community"),
        ),
        event(
            "5",
            "Digital Arts Showcase",
            EventKind::Series,
            "Monthly exhibition of digital creations from animators, designers, and digital artists across Africa.",
            &["Digital", "Arts", "Monthly"],
            "from-secondary/25 to-primary/20",
            "🎨",
            None,
        ),
    ]
}
