use mvo_core::responses::FeedSimulationResponse;
use mvo_feed::session::Completion;
use mvo_feed::{FeedKind, FeedSession, IdeaFeed};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: FeedKind,
    max_items: Option<usize>,
    remount: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let max_items = max_items.unwrap_or(ctx.config.feed.max_items);
    let response = simulate(&ctx.feed, kind, max_items, remount).await;
    output(&response, flags.format)
}

#[derive(Debug, Default)]
struct Tally {
    requests: u32,
    stale: u32,
}

impl Tally {
    fn record(&mut self, completion: Completion) {
        self.requests += 1;
        if completion == Completion::Stale {
            self.stale += 1;
        }
    }
}

/// Drive one session from mount until it is capped.
///
/// With `remount`, the first initial load is abandoned mid-flight, the way a
/// view unmounting during a fetch would leave it.
async fn simulate(
    feed: &IdeaFeed,
    kind: FeedKind,
    max_items: usize,
    remount: bool,
) -> FeedSimulationResponse {
    let mut session = FeedSession::new(kind, max_items);
    let mut tally = Tally::default();

    if remount {
        let abandoned = session.begin_initial();
        session.cancel();
        let ideas = kind.fetch(feed, abandoned.action).await;
        tally.record(session.complete(abandoned, ideas));
    }

    tally.record(session.load_initial(feed).await);
    while let Some(completion) = session.load_more(feed).await {
        tally.record(completion);
    }
    tracing::info!(
        %kind,
        loaded = session.len(),
        requests = tally.requests,
        stale = tally.stale,
        "feed simulation finished"
    );

    FeedSimulationResponse {
        kind: kind.to_string(),
        requests: tally.requests,
        stale_responses: tally.stale,
        loaded: session.len(),
        ids: session.items().iter().map(|idea| idea.id.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mvo_config::FeedConfig;
    use mvo_feed::Catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    fn seed_feed() -> IdeaFeed {
        IdeaFeed::instant(Arc::new(Catalog::seed().unwrap()), &FeedConfig::default())
    }

    #[tokio::test]
    async fn explore_loads_until_a_batch_reaches_cap() {
        let response = simulate(&seed_feed(), FeedKind::Explore, 20, false).await;
        assert_eq!(response.kind, "explore");
        assert_eq!(response.loaded, 24);
        assert_eq!(response.requests, 5);
        assert_eq!(response.stale_responses, 0);
        assert_eq!(&response.ids[..4], ["5", "8", "17", "20"]);
    }

    #[tokio::test]
    async fn remount_discards_first_initial_load() {
        let response = simulate(&seed_feed(), FeedKind::Featured, 8, true).await;
        assert_eq!(response.stale_responses, 1);
        assert_eq!(response.loaded, 8);
        assert_eq!(&response.ids[..3], ["14", "18", "2"]);
    }
}
