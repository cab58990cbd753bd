use std::sync::Arc;

use anyhow::Context;
use mvo_config::MvoConfig;
use mvo_feed::{Catalog, IdeaFeed};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub feed: IdeaFeed,
    pub config: MvoConfig,
}

impl AppContext {
    /// Load the catalog and build the feed provider.
    ///
    /// `--catalog` overrides the configured catalog path; `--no-latency`
    /// drops the simulated delays.
    pub fn init(mut config: MvoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(path) = &flags.catalog {
            config.catalog.path.clone_from(path);
        }

        let catalog = Catalog::load(&config.catalog).with_context(|| {
            if config.catalog.is_configured() {
                format!("failed to load catalog from '{}'", config.catalog.path)
            } else {
                String::from("failed to load bundled catalog")
            }
        })?;
        let catalog = Arc::new(catalog);

        let feed = if flags.no_latency {
            IdeaFeed::instant(catalog, &config.feed)
        } else {
            IdeaFeed::new(catalog, &config.feed)
        };

        Ok(Self { feed, config })
    }
}
