//! Cross-cutting error types for MVO.
//!
//! Domain-specific errors (e.g., `FeedError`, `ConfigError`) are defined in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any MVO crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing idea.
    #[must_use]
    pub fn idea_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "idea".to_string(),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::idea_not_found("42");
        assert_eq!(err.to_string(), "Entity not found: idea 42");
    }
}
