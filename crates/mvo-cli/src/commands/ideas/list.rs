use mvo_core::responses::IdeaListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(offset: usize, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ideas = ctx.feed.get_ideas(flags.limit, offset).await;
    output(&IdeaListResponse::new(ideas, offset), flags.format)
}
