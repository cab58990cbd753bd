//! Feed error types for mvo-feed.
//!
//! Provider reads never fail: a missing idea is `None` and an out-of-range
//! slice is empty. These errors cover catalog loading and the explicit
//! `require_*` helpers.

use mvo_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The catalog could not be built (duplicate IDs, bad shape).
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// Catalog JSON failed to parse.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Propagated core error (e.g. not found).
    #[error(transparent)]
    Core(#[from] CoreError),
}
