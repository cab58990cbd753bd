//! # mvo-core
//!
//! Core types, ID helpers, and error types for the MVO idea feed.
//!
//! This crate provides the foundational types shared across all MVO crates:
//! - The `Idea` entity and its closed set of rich content blocks
//! - Segment and presentation enums
//! - Synthetic ID formatting helpers
//! - Cross-cutting error types
//! - Ephemeral vote state
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
