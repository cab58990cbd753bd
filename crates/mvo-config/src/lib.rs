//! # mvo-config
//!
//! Layered configuration loading for the MVO idea feed using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MVO_*` prefix, `__` as separator)
//! 2. Project-level `.mvo/config.toml`
//! 3. User-level `~/.config/mvo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MVO_FEED__BATCH_SIZE` -> `feed.batch_size`,
//! `MVO_CATALOG__PATH` -> `catalog.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mvo_config::MvoConfig;
//!
//! let config = MvoConfig::load_with_dotenv().expect("config");
//! println!("batch size: {}", config.feed.batch_size);
//! ```

mod catalog;
mod error;
mod feed;
mod scroll;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use feed::FeedConfig;
pub use scroll::ScrollConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MvoConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl MvoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mvo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MVO_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.feed.validate()?;
        self.scroll.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mvo").join("config.toml"))
    }
}
