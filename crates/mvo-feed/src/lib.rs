//! # mvo-feed
//!
//! Idea catalog, segment classification, and paginated feed access.
//!
//! - [`catalog::Catalog`]: read-only collection of ideas, seeded or loaded
//!   from JSON, shared behind an `Arc`
//! - [`classifier`]: pure partition into featured / for-you / explore
//! - [`provider::IdeaFeed`]: async offset pagination, lookup, and synthetic
//!   infinite-scroll batches with injectable latency
//! - [`session::FeedSession`]: caller-side infinite-scroll state with
//!   stale-response rejection and an item cap
//! - [`scroll`]: scroll position persistence and retried restoration

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod latency;
pub mod provider;
pub mod scroll;
pub mod session;
mod test_support;

pub use catalog::Catalog;
pub use error::FeedError;
pub use provider::IdeaFeed;
pub use session::{FeedKind, FeedSession};
