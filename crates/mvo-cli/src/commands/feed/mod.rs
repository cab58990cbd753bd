mod segment;
mod simulate;

use mvo_core::enums::Segment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedCommands;
use crate::context::AppContext;

/// Handle `mvo feed`.
pub async fn handle(
    action: &FeedCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FeedCommands::Featured { offset } => {
            segment::run(Segment::Featured, *offset, ctx, flags).await
        }
        FeedCommands::ForYou { offset } => segment::run(Segment::ForYou, *offset, ctx, flags).await,
        FeedCommands::Explore { offset } => {
            segment::run(Segment::Explore, *offset, ctx, flags).await
        }
        FeedCommands::Simulate {
            kind,
            max_items,
            remount,
        } => simulate::run((*kind).into(), *max_items, *remount, ctx, flags).await,
    }
}
