use clap::Subcommand;

/// Catalog inspection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Show which segment each idea lands in.
    Segments,
}
