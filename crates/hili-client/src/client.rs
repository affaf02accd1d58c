//! Hili client implementation.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use hili_content::event::CreatorEvent;
use hili_content::link::ButtonLink;
use hili_content::social::SocialLink;

use crate::error::HiliError;
use crate::types::{
    ApiErrorBody, CreateEvent, CreateLink, CreateSocialLink, ItemEnvelope, LinkPosition,
    ListEnvelope, PingEnvelope, UpdateEvent, UpdateLink, UpdateSocialLink,
};
use crate::{CacheSlot, Cached, HiliClient, HiliConfig};

impl HiliClient {
    /// Create a client for the given base URL (without the `/api` suffix).
    ///
    /// # Errors
    ///
    /// Returns `HiliError::Config` if the URL is empty or the HTTP client
    /// cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HiliError> {
        Self::with_config(HiliConfig {
            base_url: base_url.into(),
            ..HiliConfig::default()
        })
    }

    /// Create a client with full configuration.
    ///
    /// Falls back to the `HILI_API_URL` and `HILI_ADMIN_TOKEN` environment
    /// variables for fields left empty.
    ///
    /// # Errors
    ///
    /// Returns `HiliError::Config` if no base URL is available.
    pub fn with_config(cfg: HiliConfig) -> Result<Self, HiliError> {
        let base_url = if cfg.base_url.is_empty() {
            std::env::var("HILI_API_URL").unwrap_or_default()
        } else {
            cfg.base_url
        };
        if base_url.is_empty() {
            return Err(HiliError::Config(
                "missing base URL — set HILI_API_URL env var or pass base_url in config".to_owned(),
            ));
        }

        let admin_token = cfg
            .admin_token
            .or_else(|| std::env::var("HILI_ADMIN_TOKEN").ok())
            .filter(|t| !t.is_empty());

        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent("hili-client/0.1.0")
            .build()
            .map_err(HiliError::Network)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            admin_token,
            cache_ttl: cfg.cache_ttl,
            http,
            events: Arc::new(RwLock::new(None)),
            links: Arc::new(RwLock::new(None)),
            social: Arc::new(RwLock::new(None)),
        })
    }

    // ── Events ───────────────────────────────────────────────────────

    /// All events, served from the read cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn events(&self) -> Result<Vec<CreatorEvent>, HiliError> {
        if let Some(cached) = read_fresh(&self.events).await {
            return Ok(cached);
        }
        let resp: ListEnvelope<CreatorEvent> = self.request("GET", "/events", None).await?;
        store(&self.events, resp.data.clone(), self.cache_ttl).await;
        Ok(resp.data)
    }

    /// Fetch one event by id.
    ///
    /// # Errors
    ///
    /// Returns a 404 `HiliError::Api` if the id is unknown.
    pub async fn event(&self, id: &str) -> Result<CreatorEvent, HiliError> {
        let resp: ItemEnvelope<CreatorEvent> =
            self.request("GET", &format!("/events/{id}"), None).await?;
        Ok(resp.data)
    }

    /// Create an event and invalidate the events cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_event(&self, payload: CreateEvent) -> Result<CreatorEvent, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<CreatorEvent> = self.request("POST", "/events", Some(body)).await?;
        invalidate(&self.events).await;
        Ok(resp.data)
    }

    /// Partially update an event and invalidate the events cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_event(
        &self,
        id: &str,
        payload: UpdateEvent,
    ) -> Result<CreatorEvent, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<CreatorEvent> = self
            .request("PUT", &format!("/events/{id}"), Some(body))
            .await?;
        invalidate(&self.events).await;
        Ok(resp.data)
    }

    /// Delete an event, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delete_event(&self, id: &str) -> Result<CreatorEvent, HiliError> {
        let resp: ItemEnvelope<CreatorEvent> = self
            .request("DELETE", &format!("/events/{id}"), None)
            .await?;
        invalidate(&self.events).await;
        Ok(resp.data)
    }

    // ── Links ────────────────────────────────────────────────────────

    /// All links sorted by position, served from the read cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn links(&self) -> Result<Vec<ButtonLink>, HiliError> {
        if let Some(cached) = read_fresh(&self.links).await {
            return Ok(cached);
        }
        let resp: ListEnvelope<ButtonLink> = self.request("GET", "/links", None).await?;
        store(&self.links, resp.data.clone(), self.cache_ttl).await;
        Ok(resp.data)
    }

    /// Fetch one link by id.
    ///
    /// # Errors
    ///
    /// Returns a 404 `HiliError::Api` if the id is unknown.
    pub async fn link(&self, id: &str) -> Result<ButtonLink, HiliError> {
        let resp: ItemEnvelope<ButtonLink> =
            self.request("GET", &format!("/links/{id}"), None).await?;
        Ok(resp.data)
    }

    /// Create a link and invalidate the links cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_link(&self, payload: CreateLink) -> Result<ButtonLink, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<ButtonLink> = self.request("POST", "/links", Some(body)).await?;
        invalidate(&self.links).await;
        Ok(resp.data)
    }

    /// Partially update a link and invalidate the links cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_link(&self, id: &str, payload: UpdateLink) -> Result<ButtonLink, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<ButtonLink> = self
            .request("PUT", &format!("/links/{id}"), Some(body))
            .await?;
        invalidate(&self.links).await;
        Ok(resp.data)
    }

    /// Delete a link, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delete_link(&self, id: &str) -> Result<ButtonLink, HiliError> {
        let resp: ItemEnvelope<ButtonLink> = self
            .request("DELETE", &format!("/links/{id}"), None)
            .await?;
        invalidate(&self.links).await;
        Ok(resp.data)
    }

    /// Rewrite link positions. The returned list is the new display order,
    /// and it replaces the links cache directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn reorder_links(
        &self,
        positions: Vec<LinkPosition>,
    ) -> Result<Vec<ButtonLink>, HiliError> {
        let body = serde_json::json!({ "links": positions });
        let resp: ListEnvelope<ButtonLink> = self
            .request("POST", "/links/reorder", Some(body))
            .await?;
        store(&self.links, resp.data.clone(), self.cache_ttl).await;
        Ok(resp.data)
    }

    // ── Social media ─────────────────────────────────────────────────

    /// All social media links, served from the read cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn social_links(&self) -> Result<Vec<SocialLink>, HiliError> {
        if let Some(cached) = read_fresh(&self.social).await {
            return Ok(cached);
        }
        let resp: ListEnvelope<SocialLink> = self.request("GET", "/social-media", None).await?;
        store(&self.social, resp.data.clone(), self.cache_ttl).await;
        Ok(resp.data)
    }

    /// Create a social media link and invalidate the social cache.
    ///
    /// # Errors
    ///
    /// Returns a 400 `HiliError::Api` if the platform already has a link.
    pub async fn create_social_link(
        &self,
        payload: CreateSocialLink,
    ) -> Result<SocialLink, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<SocialLink> =
            self.request("POST", "/social-media", Some(body)).await?;
        invalidate(&self.social).await;
        Ok(resp.data)
    }

    /// Partially update a social media link and invalidate the social cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_social_link(
        &self,
        id: &str,
        payload: UpdateSocialLink,
    ) -> Result<SocialLink, HiliError> {
        let body = serde_json::to_value(&payload)?;
        let resp: ItemEnvelope<SocialLink> = self
            .request("PUT", &format!("/social-media/{id}"), Some(body))
            .await?;
        invalidate(&self.social).await;
        Ok(resp.data)
    }

    /// Delete a social media link, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delete_social_link(&self, id: &str) -> Result<SocialLink, HiliError> {
        let resp: ItemEnvelope<SocialLink> = self
            .request("DELETE", &format!("/social-media/{id}"), None)
            .await?;
        invalidate(&self.social).await;
        Ok(resp.data)
    }

    // ── System ───────────────────────────────────────────────────────

    /// Liveness check. Returns the server's ping message.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable.
    pub async fn ping(&self) -> Result<String, HiliError> {
        let resp: PingEnvelope = self.request("GET", "/ping", None).await?;
        Ok(resp.message)
    }

    // ── Private ──────────────────────────────────────────────────────

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, HiliError> {
        let url = format!("{}/api{}", self.base_url, path);

        let mut req = match method {
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            "DELETE" => self.http.delete(&url),
            _ => self.http.get(&url),
        };

        if let Some(ref token) = self.admin_token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(HiliError::Json);
        }

        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Err(HiliError::Api {
            status_code: status.as_u16(),
            message,
        })
    }
}

impl std::fmt::Debug for HiliClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiliClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

async fn read_fresh<T: Clone>(slot: &CacheSlot<T>) -> Option<Vec<T>> {
    let guard = slot.read().await;
    match guard.as_ref() {
        Some(cached) if Instant::now() < cached.expires_at => Some(cached.data.clone()),
        _ => None,
    }
}

async fn store<T>(slot: &CacheSlot<T>, data: Vec<T>, ttl: std::time::Duration) {
    let mut guard = slot.write().await;
    *guard = Some(Cached {
        data,
        expires_at: Instant::now() + ttl,
    });
}

async fn invalidate<T>(slot: &CacheSlot<T>) {
    let mut guard = slot.write().await;
    *guard = None;
}
