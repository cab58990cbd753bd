use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ephemeral per-viewer vote state for a single idea.
///
/// Never persisted. Seeded from the idea's `votes` counter when a card or
/// detail view mounts and discarded when it unmounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VoteState {
    pub voted: bool,
    pub count: i64,
}

impl VoteState {
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self {
            voted: false,
            count,
        }
    }

    /// Flip the vote and adjust the counter by one in the matching direction.
    pub const fn toggle(&mut self) {
        if self.voted {
            self.count -= 1;
        } else {
            self.count += 1;
        }
        self.voted = !self.voted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_count() {
        let mut state = VoteState::new(45);
        state.toggle();
        assert!(state.voted);
        assert_eq!(state.count, 46);
        state.toggle();
        assert!(!state.voted);
        assert_eq!(state.count, 45);
    }
}
