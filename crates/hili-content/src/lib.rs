//! Domain layer for the Hili content API.
//!
//! Three content types back the landing page and its admin dashboard:
//!
//! - [`event::CreatorEvent`] — series and one-off events for the creator
//!   showcase section
//! - [`link::ButtonLink`] — ordered call-to-action buttons
//! - [`social::SocialLink`] — one link per social platform
//!
//! Each module exposes a store type ([`event::EventCatalog`],
//! [`link::LinkBoard`], [`social::SocialDirectory`]) that wraps an injected
//! [`hili_store::ContentRepository`] and enforces the content type's
//! invariants: defaults on create, partial merge on update, position
//! assignment, and the one-link-per-platform rule. Fixture data for the
//! factory-reset state lives next to each type.

pub mod error;
pub mod event;
pub mod id;
pub mod link;
pub mod social;

pub use error::{EventError, LinkError, SocialError};
pub use id::IdGenerator;
