use clap::Subcommand;

/// Catalog paging and lookup commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IdeasCommands {
    /// List ideas in catalog order (use --limit to bound the page).
    List {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Get an idea by ID.
    Get { id: String },
    /// Produce one infinite-scroll batch.
    More {
        /// Number of items the caller already holds.
        #[arg(long, default_value_t = 0)]
        count: usize,
    },
}
