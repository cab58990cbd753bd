//! Scroll position tracking and restoration.
//!
//! The stores are owned by the host (browser local/session storage or
//! equivalent); this module only defines their shape and the bookkeeping on
//! top. Durable keys are `scrollPosition_<path>`. A page being left for a
//! detail view writes the transient keys `restoreScrollPath`,
//! `restoreScrollPosition` and `shouldRestoreScroll`; they are cleared after
//! one restoration takes effect.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use mvo_config::ScrollConfig;

pub const DURABLE_KEY_PREFIX: &str = "scrollPosition_";
pub const RESTORE_PATH_KEY: &str = "restoreScrollPath";
pub const RESTORE_POSITION_KEY: &str = "restoreScrollPosition";
pub const SHOULD_RESTORE_KEY: &str = "shouldRestoreScroll";

/// Durable key for `path`.
#[must_use]
pub fn durable_key(path: &str) -> String {
    format!("{DURABLE_KEY_PREFIX}{path}")
}

/// String key/value store owned by the host environment.
pub trait KeyValueStore: Send + Sync {
    fn persist(&self, key: &str, value: &str);
    fn retrieve(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// In-process store for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn persist(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn retrieve(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Something that can be scrolled, e.g. the page viewport.
pub trait ScrollTarget {
    fn scroll_to(&mut self, offset: u64);
    fn current_offset(&self) -> u64;
}

/// Result of one restoration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Applied the offset saved when leaving for a detail view.
    Transient(u64),
    /// Applied the offset last saved for this path.
    Durable(u64),
    /// Nothing stored for this path.
    Nothing,
}

impl RestoreOutcome {
    #[must_use]
    pub const fn applied_offset(self) -> Option<u64> {
        match self {
            Self::Transient(offset) | Self::Durable(offset) => Some(offset),
            Self::Nothing => None,
        }
    }
}

/// Summary of a retried restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    pub attempts: usize,
    pub last: RestoreOutcome,
    /// Whether a non-zero offset took effect on the target.
    pub settled: bool,
}

pub struct ScrollTracker<D, T> {
    durable: D,
    transient: T,
}

impl<D: KeyValueStore, T: KeyValueStore> ScrollTracker<D, T> {
    pub const fn new(durable: D, transient: T) -> Self {
        Self { durable, transient }
    }

    pub const fn durable(&self) -> &D {
        &self.durable
    }

    pub const fn transient(&self) -> &T {
        &self.transient
    }

    /// Remember `offset` for `path` across sessions.
    pub fn save(&self, path: &str, offset: u64) {
        self.durable.persist(&durable_key(path), &offset.to_string());
    }

    /// Arrange for `path` to come back to `offset` on its next mount.
    pub fn mark_for_restore(&self, path: &str, offset: u64) {
        self.transient.persist(RESTORE_PATH_KEY, path);
        self.transient
            .persist(RESTORE_POSITION_KEY, &offset.to_string());
        self.transient.persist(SHOULD_RESTORE_KEY, "true");
    }

    /// One restoration attempt: transient store first, then durable.
    ///
    /// The transient keys are only honoured when they were written for
    /// `path`, and are cleared once the target reports a non-zero offset
    /// (or the stored offset was zero).
    pub fn restore_once(&self, path: &str, target: &mut impl ScrollTarget) -> RestoreOutcome {
        if let Some(offset) = self.pending_transient(path) {
            target.scroll_to(offset);
            if offset == 0 || target.current_offset() != 0 {
                self.clear_transient();
            }
            return RestoreOutcome::Transient(offset);
        }

        let key = durable_key(path);
        match self.durable.retrieve(&key).map(|raw| parse_offset(&key, &raw)) {
            Some(Some(offset)) => {
                target.scroll_to(offset);
                RestoreOutcome::Durable(offset)
            }
            Some(None) | None => RestoreOutcome::Nothing,
        }
    }

    /// Retry restoration at each delay (measured from the first call) until
    /// a non-zero offset sticks on the target.
    pub async fn restore_with_retries(
        &self,
        path: &str,
        target: &mut impl ScrollTarget,
        delays: &[Duration],
    ) -> RestoreReport {
        let start = tokio::time::Instant::now();
        let mut report = RestoreReport {
            attempts: 0,
            last: RestoreOutcome::Nothing,
            settled: false,
        };

        for delay in delays {
            tokio::time::sleep_until(start + *delay).await;
            report.attempts += 1;
            report.last = self.restore_once(path, target);
            if report.last.applied_offset().is_some_and(|offset| offset != 0)
                && target.current_offset() != 0
            {
                report.settled = true;
                break;
            }
        }

        tracing::debug!(
            path,
            attempts = report.attempts,
            settled = report.settled,
            "scroll restoration finished"
        );
        report
    }

    fn pending_transient(&self, path: &str) -> Option<u64> {
        if self.transient.retrieve(SHOULD_RESTORE_KEY).as_deref() != Some("true") {
            return None;
        }
        if self.transient.retrieve(RESTORE_PATH_KEY).as_deref() != Some(path) {
            return None;
        }
        let raw = self.transient.retrieve(RESTORE_POSITION_KEY)?;
        let offset = parse_offset(RESTORE_POSITION_KEY, &raw);
        if offset.is_none() {
            self.clear_transient();
        }
        offset
    }

    fn clear_transient(&self) {
        self.transient.remove(RESTORE_PATH_KEY);
        self.transient.remove(RESTORE_POSITION_KEY);
        self.transient.remove(SHOULD_RESTORE_KEY);
    }
}

/// Retry schedule from configuration.
#[must_use]
pub fn retry_schedule(config: &ScrollConfig) -> Vec<Duration> {
    config
        .retry_delays_ms
        .iter()
        .copied()
        .map(Duration::from_millis)
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_offset(key: &str, raw: &str) -> Option<u64> {
    // Browsers report fractional pixel offsets.
    let raw = raw.trim();
    let parsed = raw.parse::<u64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .map(|value| value as u64)
    });
    if parsed.is_none() {
        tracing::warn!(key, raw, "ignoring unparseable scroll offset");
    }
    parsed
}
