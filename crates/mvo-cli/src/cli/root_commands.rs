use clap::Subcommand;

use crate::cli::subcommands::{CatalogCommands, FeedCommands, IdeasCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Page through and look up ideas.
    Ideas {
        #[command(subcommand)]
        action: IdeasCommands,
    },
    /// Segment feeds and infinite-scroll simulation.
    Feed {
        #[command(subcommand)]
        action: FeedCommands,
    },
    /// Catalog inspection.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
}
