use mvo_core::entities::Idea;
use mvo_core::enums::Segment;
use mvo_core::responses::IdeaListResponse;
use mvo_feed::IdeaFeed;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    segment: Segment,
    offset: usize,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ideas = page(
        &ctx.feed,
        segment,
        flags.limit,
        offset,
        ctx.config.feed.featured_limit,
    )
    .await;
    tracing::debug!(%segment, returned = ideas.len(), "segment feed");
    output(&IdeaListResponse::new(ideas, offset), flags.format)
}

/// One page of `segment`. Featured pages default to `featured_limit` items
/// unless `--limit` is given.
async fn page(
    feed: &IdeaFeed,
    segment: Segment,
    limit: Option<usize>,
    offset: usize,
    featured_limit: usize,
) -> Vec<Idea> {
    let limit = match segment {
        Segment::Featured => Some(limit.unwrap_or(featured_limit)),
        Segment::ForYou | Segment::Explore => limit,
    };
    feed.get_segment(segment, limit, offset).await
}
