//! Entity structs for MVO domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names serialize in camelCase to
//! match the catalog dataset.

mod content;
mod idea;
mod vote;

pub use content::{CarouselSlide, ContentBlock, HeadingLevel};
pub use idea::Idea;
pub use vote::VoteState;
