//! The read-only idea catalog.
//!
//! A catalog is built once (from the bundled seed data or a JSON file) and
//! shared behind an `Arc`. Nothing mutates it after construction.

use std::collections::HashSet;
use std::path::Path;

use mvo_config::CatalogConfig;
use mvo_core::entities::Idea;

use crate::error::FeedError;

const SEED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    ideas: Vec<Idea>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or empty IDs.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Catalog` naming the first offending ID.
    pub fn new(ideas: Vec<Idea>) -> Result<Self, FeedError> {
        let mut seen = HashSet::with_capacity(ideas.len());
        for idea in &ideas {
            if idea.id.is_empty() {
                return Err(FeedError::Catalog(format!(
                    "idea '{}' has an empty id",
                    idea.title
                )));
            }
            if !seen.insert(idea.id.as_str()) {
                return Err(FeedError::Catalog(format!("duplicate idea id '{}'", idea.id)));
            }
        }
        Ok(Self { ideas })
    }

    /// The bundled seed catalog of twenty ideas.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled JSON is malformed.
    pub fn seed() -> Result<Self, FeedError> {
        Self::from_json_str(SEED_CATALOG)
    }

    /// Parse a JSON array of ideas.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Json` on malformed input or `FeedError::Catalog`
    /// on duplicate IDs.
    pub fn from_json_str(json: &str) -> Result<Self, FeedError> {
        let ideas: Vec<Idea> = serde_json::from_str(json)?;
        Self::new(ideas)
    }

    /// Read a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ideas = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    /// Load the catalog named in configuration, or the seed catalog.
    ///
    /// # Errors
    ///
    /// As [`Self::from_path`] or [`Self::seed`].
    pub fn load(config: &CatalogConfig) -> Result<Self, FeedError> {
        if config.is_configured() {
            Self::from_path(&config.path)
        } else {
            let catalog = Self::seed()?;
            tracing::debug!(ideas = catalog.len(), "seed catalog loaded");
            Ok(catalog)
        }
    }

    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Idea> {
        self.ideas.get(index)
    }

    /// Exact-match lookup by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::mk_idea;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_catalog_parses() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.get(0).map(|i| i.id.as_str()), Some("1"));
        assert!(catalog.find("20").is_some());
        let detailed = catalog.find("1").unwrap();
        assert!(detailed.content.as_ref().is_some_and(|blocks| !blocks.is_empty()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![mk_idea("a", 1, "2024-01-01"), mk_idea("a", 2, "2024-01-02")])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate idea id 'a'"));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find("1").is_none());
    }

    #[test]
    fn loads_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.json");
        let ideas = vec![mk_idea("x", 10, "2024-02-01")];
        std::fs::write(&path, serde_json::to_string(&ideas).unwrap()).unwrap();

        let config = CatalogConfig {
            path: path.to_string_lossy().into_owned(),
        };
        let catalog = Catalog::load(&config).unwrap();
        assert_eq!(catalog.ideas(), ideas.as_slice());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }
}
