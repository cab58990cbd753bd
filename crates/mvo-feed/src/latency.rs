//! Simulated network latency.
//!
//! The provider answers from memory, so latency is a strategy injected at
//! construction: `ConfiguredLatency` in the app, `NoLatency` in tests.

use std::fmt;
use std::time::Duration;

use mvo_config::FeedConfig;

/// Provider operation being delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedOperation {
    GetIdeas,
    GetIdeaById,
    LoadMoreIdeas,
    GetFeaturedIdeas,
    GetForYouIdeas,
    GetExploreIdeas,
}

impl FeedOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetIdeas => "get_ideas",
            Self::GetIdeaById => "get_idea_by_id",
            Self::LoadMoreIdeas => "load_more_ideas",
            Self::GetFeaturedIdeas => "get_featured_ideas",
            Self::GetForYouIdeas => "get_for_you_ideas",
            Self::GetExploreIdeas => "get_explore_ideas",
        }
    }
}

impl fmt::Display for FeedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy returning how long an operation should pretend to take.
pub trait Latency: Send + Sync {
    fn delay_for(&self, operation: FeedOperation) -> Duration;
}

/// Zero delay for every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn delay_for(&self, _operation: FeedOperation) -> Duration {
        Duration::ZERO
    }
}

/// Fixed read and load-more delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredLatency {
    pub read: Duration,
    pub load_more: Duration,
}

impl ConfiguredLatency {
    #[must_use]
    pub const fn from_config(config: &FeedConfig) -> Self {
        Self {
            read: Duration::from_millis(config.read_delay_ms),
            load_more: Duration::from_millis(config.load_more_delay_ms),
        }
    }
}

impl Latency for ConfiguredLatency {
    fn delay_for(&self, operation: FeedOperation) -> Duration {
        match operation {
            FeedOperation::LoadMoreIdeas => self.load_more,
            FeedOperation::GetIdeas
            | FeedOperation::GetIdeaById
            | FeedOperation::GetFeaturedIdeas
            | FeedOperation::GetForYouIdeas
            | FeedOperation::GetExploreIdeas => self.read,
        }
    }
}

impl<F> Latency for F
where
    F: Fn(FeedOperation) -> Duration + Send + Sync,
{
    fn delay_for(&self, operation: FeedOperation) -> Duration {
        self(operation)
    }
}
