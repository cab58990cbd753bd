//! Scroll restoration configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_retry_delays_ms() -> Vec<u64> {
    vec![0, 100, 300, 600, 1000]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Offsets from mount, in milliseconds, at which restoration is attempted.
    #[serde(default = "default_retry_delays_ms")]
    pub retry_delays_ms: Vec<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            retry_delays_ms: default_retry_delays_ms(),
        }
    }
}

impl ScrollConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_delays_ms.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidValue {
                field: "scroll.retry_delays_ms".into(),
                reason: "delays must be in ascending order".into(),
            });
        }
        Ok(())
    }
}
