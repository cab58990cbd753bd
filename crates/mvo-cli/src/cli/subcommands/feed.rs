use clap::{Subcommand, ValueEnum};
use mvo_feed::FeedKind;

/// Feed kinds selectable from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FeedKindArg {
    All,
    ForYou,
    Explore,
    Featured,
}

impl From<FeedKindArg> for FeedKind {
    fn from(arg: FeedKindArg) -> Self {
        match arg {
            FeedKindArg::All => Self::All,
            FeedKindArg::ForYou => Self::ForYou,
            FeedKindArg::Explore => Self::Explore,
            FeedKindArg::Featured => Self::Featured,
        }
    }
}

/// Segment feed commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedCommands {
    /// Featured ideas with video, highest score first.
    Featured {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// For-you ideas, highest score first.
    ForYou {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Explore ideas with video, newest first.
    Explore {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Drive a feed session through initial load and load-more until capped.
    Simulate {
        #[arg(value_enum)]
        kind: FeedKindArg,
        /// Item cap (defaults to feed.max_items).
        #[arg(long)]
        max_items: Option<usize>,
        /// Unmount and remount during the initial load.
        #[arg(long)]
        remount: bool,
    },
}
