use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ideas { action } => commands::ideas::handle(&action, ctx, flags).await,
        Commands::Feed { action } => commands::feed::handle(&action, ctx, flags).await,
        Commands::Catalog { action } => commands::catalog::handle(&action, ctx, flags),
    }
}
