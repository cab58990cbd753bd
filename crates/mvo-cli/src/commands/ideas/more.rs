use mvo_core::responses::IdeaListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `count` is how many items the caller already holds; it seeds the
/// synthetic ID suffixes of the batch.
pub async fn run(count: usize, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ideas = ctx.feed.load_more_ideas(count).await;
    output(&IdeaListResponse::new(ideas, count), flags.format)
}
