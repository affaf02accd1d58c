//! Client SDK for the Hili content API.
//!
//! Typed access to the events, links, and social-media endpoints with an
//! in-memory read cache per collection. Mutations invalidate the affected
//! collection on success, mirroring what the admin dashboard's query layer
//! does in the browser.
//!
//! # Example
//!
//! ```rust,no_run
//! use hili_client::HiliClient;
//!
//! # async fn example() -> Result<(), hili_client::HiliError> {
//! let client = HiliClient::new("http://localhost:8787")?;
//! for event in client.events().await? {
//!     println!("{}: {}", event.id, event.title);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use error::HiliError;
pub use types::{
    CreateEvent, CreateLink, CreateSocialLink, LinkPosition, UpdateEvent, UpdateLink,
    UpdateSocialLink,
};

// Record types are shared with the server, the way the original client and
// server shared one types module.
pub use hili_content::event::{CreatorEvent, EventKind};
pub use hili_content::link::ButtonLink;
pub use hili_content::social::{Platform, SocialLink};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Hili client.
#[derive(Debug, Clone)]
pub struct HiliConfig {
    /// API base URL, without the `/api` suffix.
    pub base_url: String,
    /// Admin token sent as `Authorization: Bearer` on mutations.
    pub admin_token: Option<String>,
    /// Read cache TTL. Default: 30 seconds.
    pub cache_ttl: Duration,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl Default for HiliConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            admin_token: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

struct Cached<T> {
    data: Vec<T>,
    expires_at: Instant,
}

type CacheSlot<T> = Arc<RwLock<Option<Cached<T>>>>;

/// Hili content API client.
pub struct HiliClient {
    base_url: String,
    admin_token: Option<String>,
    cache_ttl: Duration,
    http: reqwest::Client,
    events: CacheSlot<CreatorEvent>,
    links: CacheSlot<ButtonLink>,
    social: CacheSlot<SocialLink>,
}
