//! End-to-end behaviour of the feed provider over the seed catalog and
//! hand-built fixtures.

use std::collections::HashSet;
use std::sync::Arc;

use mvo_config::{FeedConfig, MvoConfig};
use mvo_core::entities::Idea;
use mvo_core::ids::split_synthetic_id;
use mvo_feed::classifier::{select_explore, select_featured, select_for_you};
use mvo_feed::scroll::{MemoryStore, RestoreOutcome, ScrollTarget, ScrollTracker};
use mvo_feed::session::Completion;
use mvo_feed::{Catalog, FeedKind, FeedSession, IdeaFeed};
use pretty_assertions::assert_eq;

fn seed_feed() -> IdeaFeed {
    IdeaFeed::instant(Arc::new(Catalog::seed().unwrap()), &FeedConfig::default())
}

fn ids(ideas: &[Idea]) -> Vec<&str> {
    ideas.iter().map(|idea| idea.id.as_str()).collect()
}

#[tokio::test]
async fn segments_never_share_an_idea() {
    let feed = seed_feed();
    let featured = feed.get_featured_ideas(Some(usize::MAX)).await;
    let for_you = feed.get_for_you_ideas(None, 0).await;
    let explore = feed.get_explore_ideas(None, 0).await;

    let mut seen = HashSet::new();
    for idea in featured.iter().chain(&for_you).chain(&explore) {
        assert!(seen.insert(idea.id.as_str()), "{} in two segments", idea.id);
    }
    assert!(featured.iter().all(|i| i.is_featured() && i.has_video() && !i.is_for_you()));
    assert!(for_you.iter().all(|i| i.is_for_you() && !i.is_featured()));
    assert!(explore.iter().all(|i| i.has_video() && !i.is_featured() && !i.is_for_you()));
}

#[test]
fn segment_orderings_hold_on_seed_data() {
    let catalog = Catalog::seed().unwrap();
    let featured = select_featured(catalog.ideas());
    assert!(featured.windows(2).all(|w| w[0].score >= w[1].score));

    let explore = select_explore(catalog.ideas());
    assert!(explore.windows(2).all(|w| w[0].created_at_utc() >= w[1].created_at_utc()));
}

#[tokio::test]
async fn for_you_count_matches_flags() {
    let catalog = Catalog::seed().unwrap();
    let expected = catalog
        .ideas()
        .iter()
        .filter(|i| i.is_for_you() && !i.is_featured())
        .count();
    let feed = seed_feed();
    let for_you = feed.get_for_you_ideas(None, 0).await;
    assert_eq!(for_you.len(), expected);
    assert!(for_you.len() <= catalog.len());
    assert_eq!(for_you, select_for_you(catalog.ideas()));
}

#[tokio::test]
async fn seed_catalog_pages() {
    let feed = seed_feed();
    assert_eq!(ids(&feed.get_ideas(Some(5), 0).await), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(ids(&feed.get_ideas(Some(5), 18).await), vec!["19", "20"]);
    assert!(feed.get_idea_by_id("nonexistent").await.is_none());
}

#[tokio::test]
async fn load_more_batches_differ_only_in_suffix() {
    let feed = seed_feed();
    let first = feed.load_more_ideas(0).await;
    let repeat = feed.load_more_ideas(0).await;
    let later = feed.load_more_ideas(5).await;

    assert_eq!(first.len(), 5);
    assert_eq!(later.len(), 5);
    assert_eq!(ids(&first), ids(&repeat));

    for (a, b) in first.iter().zip(&later) {
        let (base_a, pos_a) = split_synthetic_id(&a.id).unwrap();
        let (base_b, pos_b) = split_synthetic_id(&b.id).unwrap();
        assert_eq!(base_a, base_b);
        assert_eq!(pos_b, pos_a + 5);
        assert_eq!(a.title, b.title);
    }
}

#[tokio::test]
async fn infinite_feed_stops_after_the_batch_that_reaches_the_cap() {
    let config = MvoConfig::default();
    let feed = IdeaFeed::instant(Arc::new(Catalog::seed().unwrap()), &config.feed);
    let mut session = FeedSession::new(FeedKind::Explore, config.feed.max_items);

    assert_eq!(session.load_initial(&feed).await, Completion::Applied { added: 4 });
    let mut batches = 0;
    while let Some(completion) = session.load_more(&feed).await {
        assert!(matches!(completion, Completion::Applied { .. }));
        batches += 1;
    }
    // 4 + 5 + 5 + 5 = 19 keeps going; the fourth batch lands at 24.
    assert_eq!(batches, 4);
    assert_eq!(session.len(), 24);
    assert!(session.is_capped());

    let unique: HashSet<&str> = session.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(unique.len(), 24);
}

struct Page {
    offset: u64,
}

impl ScrollTarget for Page {
    fn scroll_to(&mut self, offset: u64) {
        self.offset = offset;
    }

    fn current_offset(&self) -> u64 {
        self.offset
    }
}

#[test]
fn transient_scroll_restores_once() {
    let tracker = ScrollTracker::new(MemoryStore::new(), MemoryStore::new());
    tracker.save("/", 75);
    tracker.mark_for_restore("/", 400);
    let mut page = Page { offset: 0 };

    assert_eq!(tracker.restore_once("/", &mut page), RestoreOutcome::Transient(400));
    assert_eq!(page.offset, 400);
    assert!(tracker.transient().is_empty());

    assert_eq!(tracker.restore_once("/", &mut page), RestoreOutcome::Durable(75));
    assert_eq!(page.offset, 75);
}
