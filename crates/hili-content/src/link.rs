//! Call-to-action button links.
//!
//! The landing page renders a column of buttons ordered by `position`.
//! Positions are assigned on create (`max + 1`) and rewritten wholesale by
//! the admin dashboard's reorder call. Nothing re-validates uniqueness or
//! contiguity afterwards — the dashboard owns that, and a gap or duplicate
//! only affects display order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hili_store::{ContentRecord, ContentRepository};

use crate::error::LinkError;
use crate::id::IdGenerator;

/// Default icon applied when a create payload omits one.
pub const DEFAULT_ICON: &str = "🔗";

/// A button link as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonLink {
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for ButtonLink {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A validated create payload. `position` is assigned by the board.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub label: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub position: Option<i64>,
}

/// One entry of a reorder call: move the link with `id` to `position`.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionUpdate {
    pub id: String,
    pub position: i64,
}

/// The button link store: CRUD plus reordering over an injected repository.
pub struct LinkBoard {
    repo: Arc<dyn ContentRepository<ButtonLink>>,
    ids: IdGenerator,
}

impl LinkBoard {
    /// Create a board over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn ContentRepository<ButtonLink>>) -> Self {
        Self {
            repo,
            ids: IdGenerator::new(),
        }
    }

    /// All links, sorted ascending by position at read time.
    ///
    /// Storage order is insertion order; display order is always derived
    /// here so a reorder never has to rewrite the store's layout.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] if the repository fails.
    pub async fn list(&self) -> Result<Vec<ButtonLink>, LinkError> {
        let mut links = self.repo.list().await?;
        links.sort_by_key(|l| l.position);
        Ok(links)
    }

    /// Look up one link by id.
    ///
    /// # Errors
    ///
    /// [`LinkError::NotFound`] if the id is unknown.
    pub async fn get(&self, id: &str) -> Result<ButtonLink, LinkError> {
        self.repo.get(id).await?.ok_or(LinkError::NotFound)
    }

    /// Create a link at the end of the display order.
    ///
    /// The new position is `max(existing positions, 0) + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] if the repository fails.
    pub async fn create(&self, new: NewLink) -> Result<ButtonLink, LinkError> {
        let max_position = self
            .repo
            .list()
            .await?
            .iter()
            .map(|l| l.position)
            .max()
            .unwrap_or(0);

        let now = Utc::now();
        let link = ButtonLink {
            id: self.ids.next_id(),
            label: new.label,
            url: new.url,
            icon: Some(new.icon.unwrap_or_else(|| DEFAULT_ICON.to_owned())),
            position: max_position.saturating_add(1),
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(link.clone()).await?;
        info!(id = %link.id, position = link.position, "link created");
        Ok(link)
    }

    /// Merge a partial update over an existing link.
    ///
    /// # Errors
    ///
    /// [`LinkError::NotFound`] if the id is unknown.
    pub async fn update(&self, id: &str, patch: LinkPatch) -> Result<ButtonLink, LinkError> {
        let mut link = self.get(id).await?;

        if let Some(label) = patch.label {
            link.label = label;
        }
        if let Some(url) = patch.url {
            link.url = url;
        }
        if let Some(icon) = patch.icon {
            link.icon = Some(icon);
        }
        if let Some(position) = patch.position {
            link.position = position;
        }
        link.updated_at = Utc::now();

        if !self.repo.replace(link.clone()).await? {
            return Err(LinkError::NotFound);
        }
        info!(id = %link.id, "link updated");
        Ok(link)
    }

    /// Remove a link, returning the removed record.
    ///
    /// # Errors
    ///
    /// [`LinkError::NotFound`] if the id is unknown.
    pub async fn delete(&self, id: &str) -> Result<ButtonLink, LinkError> {
        let removed = self.repo.remove(id).await?.ok_or(LinkError::NotFound)?;
        info!(id = %removed.id, "link deleted");
        Ok(removed)
    }

    /// Apply a batch of position overwrites, then return the full store
    /// sorted by position.
    ///
    /// Unknown ids are skipped silently — the dashboard may race a delete,
    /// and a stale entry should not fail the whole batch. Positions are not
    /// re-validated for uniqueness or gaps. Application is not atomic; pairs
    /// are applied in order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] if the repository fails.
    pub async fn reorder(&self, moves: Vec<PositionUpdate>) -> Result<Vec<ButtonLink>, LinkError> {
        for m in moves {
            let Some(mut link) = self.repo.get(&m.id).await? else {
                debug!(id = %m.id, "reorder skipped unknown link id");
                continue;
            };
            link.position = m.position;
            link.updated_at = Utc::now();
            self.repo.replace(link).await?;
        }
        info!("links reordered");
        self.list().await
    }
}

impl std::fmt::Debug for LinkBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkBoard").finish_non_exhaustive()
    }
}

/// Fixture links for the factory-reset state.
#[must_use]
pub fn fixtures() -> Vec<ButtonLink> {
    let now = Utc::now();
    let link = |id: &str, label: &str, url: &str, icon: &str, position: i64| ButtonLink {
        id: id.to_owned(),
        label: label.to_owned(),
        url: url.to_owned(),
        icon: Some(icon.to_owned()),
        position,
        created_at: now,
        updated_at: now,
    };

    vec![
        link("1", "Watch Live", "https://example.com/live", "📺", 1),
        link("2", "Subscribe", "https://example.com/subscribe", "🔔", 2),
        link("3", "Learn More", "https://example.com/about", "ℹ️", 3),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hili_store::MemoryRepository;

    fn board() -> LinkBoard {
        LinkBoard::new(Arc::new(MemoryRepository::new()))
    }

    fn draft(label: &str) -> NewLink {
        NewLink {
            label: label.to_owned(),
            url: format!("https://example.com/{label}"),
            icon: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_next_position() {
        let board = board();
        let first = board.create(draft("a")).await.unwrap();
        let second = board.create(draft("b")).await.unwrap();
        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);
        assert_eq!(first.icon.as_deref(), Some(DEFAULT_ICON));
    }

    #[tokio::test]
    async fn create_after_gap_continues_from_max() {
        let board = board();
        let a = board.create(draft("a")).await.unwrap();
        board
            .update(
                &a.id,
                LinkPatch {
                    position: Some(10),
                    ..LinkPatch::default()
                },
            )
            .await
            .unwrap();
        let b = board.create(draft("b")).await.unwrap();
        assert_eq!(b.position, 11);
    }

    #[tokio::test]
    async fn list_sorts_by_position() {
        let board = board();
        let a = board.create(draft("a")).await.unwrap();
        let b = board.create(draft("b")).await.unwrap();
        board
            .reorder(vec![
                PositionUpdate {
                    id: a.id.clone(),
                    position: 5,
                },
                PositionUpdate {
                    id: b.id.clone(),
                    position: 1,
                },
            ])
            .await
            .unwrap();
        let ids: Vec<String> = board.list().await.unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn reorder_skips_unknown_ids() {
        let board = board();
        let a = board.create(draft("a")).await.unwrap();
        let links = board
            .reorder(vec![
                PositionUpdate {
                    id: "ghost".to_owned(),
                    position: 1,
                },
                PositionUpdate {
                    id: a.id.clone(),
                    position: 7,
                },
            ])
            .await
            .unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].position, 7);
    }

    #[tokio::test]
    async fn reorder_refreshes_updated_at() {
        let board = board();
        let a = board.create(draft("a")).await.unwrap();
        let links = board
            .reorder(vec![PositionUpdate {
                id: a.id.clone(),
                position: 3,
            }])
            .await
            .unwrap();
        assert!(links[0].updated_at >= a.updated_at);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let board = board();
        let a = board.create(draft("a")).await.unwrap();
        board.delete(&a.id).await.unwrap();
        assert!(matches!(board.get(&a.id).await, Err(LinkError::NotFound)));
    }

    #[tokio::test]
    async fn fixtures_are_already_ordered() {
        let positions: Vec<i64> = fixtures().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
