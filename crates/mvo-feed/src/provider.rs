//! Paginated, latency-simulating read access to the catalog.
//!
//! `IdeaFeed` owns an `Arc<Catalog>` and a latency strategy. Reads never
//! fail: offsets past the end give an empty page and unknown IDs give `None`.

use std::sync::Arc;

use mvo_config::FeedConfig;
use mvo_core::entities::Idea;
use mvo_core::enums::Segment;
use mvo_core::errors::CoreError;

use crate::catalog::Catalog;
use crate::classifier;
use crate::error::FeedError;
use crate::latency::{ConfiguredLatency, FeedOperation, Latency, NoLatency};

/// Slice `items[offset .. offset + limit]`, clamped to the available range.
///
/// `limit` of `None` or `Some(0)` means "to the end".
#[must_use]
pub fn paginate<T: Clone>(items: &[T], limit: Option<usize>, offset: usize) -> Vec<T> {
    let start = offset.min(items.len());
    let end = limit.filter(|&limit| limit > 0).map_or(items.len(), |limit| {
        offset.saturating_add(limit).min(items.len())
    });
    items[start..end.max(start)].to_vec()
}

pub struct IdeaFeed {
    catalog: Arc<Catalog>,
    latency: Box<dyn Latency>,
    batch_size: usize,
    featured_limit: usize,
}

impl IdeaFeed {
    /// Build a feed with latency taken from `config`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: &FeedConfig) -> Self {
        Self::with_latency(catalog, config, ConfiguredLatency::from_config(config))
    }

    /// Build a feed with an explicit latency strategy.
    #[must_use]
    pub fn with_latency(
        catalog: Arc<Catalog>,
        config: &FeedConfig,
        latency: impl Latency + 'static,
    ) -> Self {
        Self {
            catalog,
            latency: Box::new(latency),
            batch_size: config.batch_size,
            featured_limit: config.featured_limit,
        }
    }

    /// Build a feed that answers immediately.
    #[must_use]
    pub fn instant(catalog: Arc<Catalog>, config: &FeedConfig) -> Self {
        Self::with_latency(catalog, config, NoLatency)
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Page through the catalog in authoring order.
    pub async fn get_ideas(&self, limit: Option<usize>, offset: usize) -> Vec<Idea> {
        self.simulate(FeedOperation::GetIdeas).await;
        let page = paginate(self.catalog.ideas(), limit, offset);
        tracing::debug!(?limit, offset, returned = page.len(), "get_ideas");
        page
    }

    /// Exact-match lookup. `None` when no idea has this ID.
    pub async fn get_idea_by_id(&self, id: &str) -> Option<Idea> {
        self.simulate(FeedOperation::GetIdeaById).await;
        let found = self.catalog.find(id).cloned();
        tracing::debug!(id, found = found.is_some(), "get_idea_by_id");
        found
    }

    /// Lookup that surfaces a missing idea as an error.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Core(CoreError::NotFound)` when the ID is unknown.
    pub async fn require_idea(&self, id: &str) -> Result<Idea, FeedError> {
        self.get_idea_by_id(id)
            .await
            .ok_or_else(|| CoreError::idea_not_found(id).into())
    }

    /// Produce one infinite-scroll batch of synthetic ideas.
    ///
    /// Clone `i` comes from `catalog[i % len]` and is renamed
    /// `{base_id}-{current_count + i}`. The same `current_count` always gives
    /// the same batch; the sequence never ends on its own, so callers cap it.
    pub async fn load_more_ideas(&self, current_count: usize) -> Vec<Idea> {
        self.simulate(FeedOperation::LoadMoreIdeas).await;
        let ideas = self.catalog.ideas();
        if ideas.is_empty() {
            return Vec::new();
        }
        let batch: Vec<Idea> = (0..self.batch_size)
            .map(|i| ideas[i % ideas.len()].synthesize(current_count.saturating_add(i)))
            .collect();
        tracing::debug!(current_count, returned = batch.len(), "load_more_ideas");
        batch
    }

    /// Featured segment, truncated to `limit` (default from config).
    pub async fn get_featured_ideas(&self, limit: Option<usize>) -> Vec<Idea> {
        self.simulate(FeedOperation::GetFeaturedIdeas).await;
        let limit = limit.unwrap_or(self.featured_limit);
        let page = paginate(&classifier::select_featured(self.catalog.ideas()), Some(limit), 0);
        tracing::debug!(limit, returned = page.len(), "get_featured_ideas");
        page
    }

    pub async fn get_for_you_ideas(&self, limit: Option<usize>, offset: usize) -> Vec<Idea> {
        self.simulate(FeedOperation::GetForYouIdeas).await;
        let page = paginate(&classifier::select_for_you(self.catalog.ideas()), limit, offset);
        tracing::debug!(?limit, offset, returned = page.len(), "get_for_you_ideas");
        page
    }

    pub async fn get_explore_ideas(&self, limit: Option<usize>, offset: usize) -> Vec<Idea> {
        self.simulate(FeedOperation::GetExploreIdeas).await;
        let page = paginate(&classifier::select_explore(self.catalog.ideas()), limit, offset);
        tracing::debug!(?limit, offset, returned = page.len(), "get_explore_ideas");
        page
    }

    /// Segment view by enum, for callers that pick the segment at runtime.
    pub async fn get_segment(
        &self,
        segment: Segment,
        limit: Option<usize>,
        offset: usize,
    ) -> Vec<Idea> {
        match segment {
            Segment::Featured => {
                let featured = self.get_featured_ideas(Some(usize::MAX)).await;
                paginate(&featured, limit, offset)
            }
            Segment::ForYou => self.get_for_you_ideas(limit, offset).await,
            Segment::Explore => self.get_explore_ideas(limit, offset).await,
        }
    }

    async fn simulate(&self, operation: FeedOperation) {
        let delay = self.latency.delay_for(operation);
        if !delay.is_zero() {
            tracing::trace!(%operation, ?delay, "simulating latency");
            tokio::time::sleep(delay).await;
        }
    }
}
