//! CLI response types returned as JSON by `mvo` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ContentBlock, Idea};
use crate::enums::Segment;

/// Response from `mvo ideas list`, `mvo ideas more` and `mvo feed <segment>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdeaListResponse {
    pub ideas: Vec<Idea>,
    pub offset: usize,
    pub returned: usize,
}

impl IdeaListResponse {
    #[must_use]
    pub fn new(ideas: Vec<Idea>, offset: usize) -> Self {
        let returned = ideas.len();
        Self {
            ideas,
            offset,
            returned,
        }
    }
}

/// One content block reduced to its tag and a plain-text summary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentOutline {
    pub kind: String,
    pub summary: String,
}

/// Response from `mvo ideas get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdeaDetailResponse {
    pub idea: Idea,
    /// Outline of the detail page, in display order.
    pub blocks: Vec<ContentOutline>,
    /// Image and video URLs referenced by the content blocks.
    pub media: Vec<String>,
}

impl IdeaDetailResponse {
    #[must_use]
    pub fn new(idea: Idea) -> Self {
        let content = idea.content.as_deref().unwrap_or_default();
        let blocks = content
            .iter()
            .map(|block| ContentOutline {
                kind: block.kind().to_string(),
                summary: block.summary(),
            })
            .collect();
        let media = content
            .iter()
            .flat_map(ContentBlock::media_sources)
            .map(str::to_string)
            .collect();
        Self {
            idea,
            blocks,
            media,
        }
    }
}

/// One row of `mvo catalog segments`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SegmentAssignment {
    pub id: String,
    pub title: String,
    pub segment: Option<Segment>,
}

/// Response from `mvo feed simulate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedSimulationResponse {
    pub kind: String,
    pub requests: u32,
    pub stale_responses: u32,
    pub loaded: usize,
    pub ids: Vec<String>,
}
