//! Social media links.
//!
//! The footer shows one icon per platform, so the store enforces at most
//! one link per platform: a full scan on create, and on update only when
//! the platform is actually being changed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use hili_store::{ContentRecord, ContentRepository};

use crate::error::SocialError;
use crate::id::IdGenerator;

/// The six supported platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
    Linkedin,
}

impl Platform {
    /// Every platform, in the order error messages list them.
    pub const ALL: [Self; 6] = [
        Self::Twitter,
        Self::Instagram,
        Self::Facebook,
        Self::Tiktok,
        Self::Youtube,
        Self::Linkedin,
    ];

    /// Comma-separated wire names, used in validation messages.
    pub const ALL_NAMES: &'static str = "twitter, instagram, facebook, tiktok, youtube, linkedin";

    /// Parse a wire value.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::InvalidPlatform`] for anything outside the
    /// six supported values.
    pub fn parse(value: &str) -> Result<Self, SocialError> {
        match value {
            "twitter" => Ok(Self::Twitter),
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "tiktok" => Ok(Self::Tiktok),
            "youtube" => Ok(Self::Youtube),
            "linkedin" => Ok(Self::Linkedin),
            other => Err(SocialError::InvalidPlatform {
                value: other.to_owned(),
            }),
        }
    }

    /// The wire name of this platform.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A social media link as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for SocialLink {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SocialPatch {
    pub platform: Option<Platform>,
    pub url: Option<String>,
}

/// The social link store: CRUD plus the one-per-platform invariant.
pub struct SocialDirectory {
    repo: Arc<dyn ContentRepository<SocialLink>>,
    ids: IdGenerator,
}

impl SocialDirectory {
    /// Create a directory over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn ContentRepository<SocialLink>>) -> Self {
        Self {
            repo,
            ids: IdGenerator::new(),
        }
    }

    /// All links in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::Store`] if the repository fails.
    pub async fn list(&self) -> Result<Vec<SocialLink>, SocialError> {
        Ok(self.repo.list().await?)
    }

    /// Look up one link by id.
    ///
    /// # Errors
    ///
    /// [`SocialError::NotFound`] if the id is unknown.
    pub async fn get(&self, id: &str) -> Result<SocialLink, SocialError> {
        self.repo.get(id).await?.ok_or(SocialError::NotFound)
    }

    /// Create a link for a platform that has none yet.
    ///
    /// A failed create leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// [`SocialError::AlreadyExists`] if the platform already has a link.
    pub async fn create(&self, platform: Platform, url: String) -> Result<SocialLink, SocialError> {
        self.ensure_platform_free(platform).await?;

        let now = Utc::now();
        let link = SocialLink {
            id: self.ids.next_id(),
            platform,
            url,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(link.clone()).await?;
        info!(id = %link.id, platform = %link.platform, "social media link created");
        Ok(link)
    }

    /// Merge a partial update over an existing link.
    ///
    /// When the patch changes the platform, the one-per-platform invariant
    /// is re-checked against the whole store. An unchanged platform skips
    /// the check.
    ///
    /// # Errors
    ///
    /// - [`SocialError::NotFound`] if the id is unknown.
    /// - [`SocialError::AlreadyExists`] if the new platform is taken.
    pub async fn update(&self, id: &str, patch: SocialPatch) -> Result<SocialLink, SocialError> {
        let mut link = self.get(id).await?;

        if let Some(platform) = patch.platform {
            if platform != link.platform {
                self.ensure_platform_free(platform).await?;
            }
            link.platform = platform;
        }
        if let Some(url) = patch.url {
            link.url = url;
        }
        link.updated_at = Utc::now();

        if !self.repo.replace(link.clone()).await? {
            return Err(SocialError::NotFound);
        }
        info!(id = %link.id, "social media link updated");
        Ok(link)
    }

    /// Remove a link, returning the removed record.
    ///
    /// # Errors
    ///
    /// [`SocialError::NotFound`] if the id is unknown.
    pub async fn delete(&self, id: &str) -> Result<SocialLink, SocialError> {
        let removed = self.repo.remove(id).await?.ok_or(SocialError::NotFound)?;
        info!(id = %removed.id, "social media link deleted");
        Ok(removed)
    }

    async fn ensure_platform_free(&self, platform: Platform) -> Result<(), SocialError> {
        let taken = self
            .repo
            .list()
            .await?
            .iter()
            .any(|l| l.platform == platform);
        if taken {
            return Err(SocialError::AlreadyExists { platform });
        }
        Ok(())
    }
}

impl std::fmt::Debug for SocialDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialDirectory").finish_non_exhaustive()
    }
}

/// Fixture links for the factory-reset state.
#[must_use]
pub fn fixtures() -> Vec<SocialLink> {
    let now = Utc::now();
    let link = |id: &str, platform: Platform, url: &str| SocialLink {
        id: id.to_owned(),
        platform,
        url: url.to_owned(),
        created_at: now,
        updated_at: now,
    };

    vec![
        link("1", Platform::Twitter, "https://twitter.com/hiliproductions"),
        link("2", Platform::Instagram, "https://instagram.com/hiliproductions"),
        link("3", Platform::Youtube, "https://youtube.com/@hiliproductions"),
    ]
}
