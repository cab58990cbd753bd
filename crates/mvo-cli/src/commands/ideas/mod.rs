mod get;
mod list;
mod more;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IdeasCommands;
use crate::context::AppContext;

/// Handle `mvo ideas`.
pub async fn handle(
    action: &IdeasCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IdeasCommands::List { offset } => list::run(*offset, ctx, flags).await,
        IdeasCommands::Get { id } => get::run(id, ctx, flags).await,
        IdeasCommands::More { count } => more::run(*count, ctx, flags).await,
    }
}
