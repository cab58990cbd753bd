//! Caller-side feed state for infinite scroll.
//!
//! A `FeedSession` belongs to one view. It remembers what has been loaded,
//! stops loading more once a load-more brings it to `max_items`, and tags every request with a generation token so
//! a response that arrives after the view moved on (remount, tab switch,
//! newer request) is dropped instead of applied.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use mvo_core::entities::Idea;

use crate::provider::IdeaFeed;

// ---------------------------------------------------------------------------
// RequestTracker
// ---------------------------------------------------------------------------

/// Opaque generation tag carried by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter. Only the latest issued token is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a new token, superseding every earlier one.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }

    /// Supersede all outstanding tokens without issuing a usable one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }
}

// ---------------------------------------------------------------------------
// FeedKind
// ---------------------------------------------------------------------------

/// Which provider view backs a feed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Whole catalog in authoring order.
    All,
    ForYou,
    Explore,
    Featured,
}

impl FeedKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ForYou => "for_you",
            Self::Explore => "explore",
            Self::Featured => "featured",
        }
    }

    /// Run `action` against the provider view for this kind.
    ///
    /// Load-more always goes through the synthetic batch generator.
    pub async fn fetch(self, feed: &IdeaFeed, action: FeedAction) -> Vec<Idea> {
        match action {
            FeedAction::Initial => match self {
                Self::All => feed.get_ideas(None, 0).await,
                Self::ForYou => feed.get_for_you_ideas(None, 0).await,
                Self::Explore => feed.get_explore_ideas(None, 0).await,
                Self::Featured => feed.get_featured_ideas(None).await,
            },
            FeedAction::LoadMore { current_count } => feed.load_more_ideas(current_count).await,
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    Initial,
    LoadMore { current_count: usize },
}

/// A request handed out by the session, to be fetched and then completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
    pub token: RequestToken,
    pub action: FeedAction,
}

/// What happened to a completed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied { added: usize },
    /// Superseded by a newer request or a cancel; discarded.
    Stale,
}

#[derive(Debug)]
pub struct FeedSession {
    kind: FeedKind,
    max_items: usize,
    items: Vec<Idea>,
    tracker: RequestTracker,
    in_flight: Option<RequestToken>,
    initialized: bool,
    exhausted: bool,
}

impl FeedSession {
    #[must_use]
    pub const fn new(kind: FeedKind, max_items: usize) -> Self {
        Self {
            kind,
            max_items,
            items: Vec::new(),
            tracker: RequestTracker::new(),
            in_flight: None,
            initialized: false,
            exhausted: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FeedKind {
        self.kind
    }

    #[must_use]
    pub fn items(&self) -> &[Idea] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// No further load-more will start.
    ///
    /// Set when a load-more lands at or past `max_items`, or returns nothing.
    /// The initial load never sets it, so a view whose first page already
    /// fills the cap still gets one load-more.
    #[must_use]
    pub const fn is_capped(&self) -> bool {
        self.exhausted
    }

    /// Start (or restart) the initial load. Supersedes any in-flight request.
    pub fn begin_initial(&mut self) -> FeedRequest {
        let token = self.tracker.issue();
        self.in_flight = Some(token);
        FeedRequest {
            token,
            action: FeedAction::Initial,
        }
    }

    /// Start a load-more, unless one is already running, the initial load
    /// has not landed, or the cap is reached.
    pub fn begin_load_more(&mut self) -> Option<FeedRequest> {
        if !self.initialized || self.is_loading() || self.is_capped() {
            return None;
        }
        let token = self.tracker.issue();
        self.in_flight = Some(token);
        Some(FeedRequest {
            token,
            action: FeedAction::LoadMore {
                current_count: self.items.len(),
            },
        })
    }

    /// Apply a response if its request is still the latest one.
    pub fn complete(&mut self, request: FeedRequest, ideas: Vec<Idea>) -> Completion {
        if !self.tracker.is_current(request.token) {
            tracing::debug!(
                kind = %self.kind,
                generation = request.token.generation(),
                "dropping stale feed response"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        let added = ideas.len();
        match request.action {
            FeedAction::Initial => {
                self.items = ideas;
                self.initialized = true;
                self.exhausted = false;
            }
            FeedAction::LoadMore { .. } => {
                self.items.extend(ideas);
                if added == 0 || self.items.len() >= self.max_items {
                    tracing::debug!(kind = %self.kind, loaded = self.items.len(), "feed exhausted");
                    self.exhausted = true;
                }
            }
        }
        Completion::Applied { added }
    }

    /// Drop every outstanding request, e.g. when the view unmounts.
    pub fn cancel(&mut self) {
        self.tracker.invalidate();
        self.in_flight = None;
    }

    /// Whether scrolling to `visible_index` should trigger a load-more.
    ///
    /// Fires once the viewer is within two items of the end.
    #[must_use]
    pub fn should_load_more(&self, visible_index: usize) -> bool {
        self.initialized
            && !self.is_loading()
            && !self.is_capped()
            && visible_index.saturating_add(2) >= self.items.len()
    }

    /// Initial load against `feed`, start to finish.
    pub async fn load_initial(&mut self, feed: &IdeaFeed) -> Completion {
        let request = self.begin_initial();
        let ideas = self.kind.fetch(feed, request.action).await;
        self.complete(request, ideas)
    }

    /// One load-more against `feed`. `None` when no load was started.
    pub async fn load_more(&mut self, feed: &IdeaFeed) -> Option<Completion> {
        let request = self.begin_load_more()?;
        let ideas = self.kind.fetch(feed, request.action).await;
        Some(self.complete(request, ideas))
    }
}
