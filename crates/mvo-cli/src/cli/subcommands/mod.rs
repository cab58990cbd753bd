mod catalog;
mod feed;
mod ideas;

pub use catalog::CatalogCommands;
pub use feed::{FeedCommands, FeedKindArg};
pub use ideas::IdeasCommands;
