//! Feed provider configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_read_delay_ms() -> u64 {
    100
}

const fn default_load_more_delay_ms() -> u64 {
    1000
}

const fn default_batch_size() -> usize {
    5
}

const fn default_featured_limit() -> usize {
    5
}

/// Caller-side cap on how many items an infinite feed accumulates.
const fn default_max_items() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeedConfig {
    /// Simulated latency for read operations, in milliseconds.
    #[serde(default = "default_read_delay_ms")]
    pub read_delay_ms: u64,

    /// Simulated latency for `load_more_ideas`, in milliseconds.
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u64,

    /// Number of synthetic ideas produced per infinite-scroll batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Default truncation for the featured segment.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    /// Maximum items a feed session will hold before it stops loading more.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            read_delay_ms: default_read_delay_ms(),
            load_more_delay_ms: default_load_more_delay_ms(),
            batch_size: default_batch_size(),
            featured_limit: default_featured_limit(),
            max_items: default_max_items(),
        }
    }
}

impl FeedConfig {
    /// Latency-free copy, for tests and `--no-latency`.
    #[must_use]
    pub fn without_latency(&self) -> Self {
        Self {
            read_delay_ms: 0,
            load_more_delay_ms: 0,
            ..self.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.batch_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.featured_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.featured_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
