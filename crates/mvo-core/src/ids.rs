//! Synthetic ID formatting.
//!
//! Infinite-scroll batches clone catalog ideas and rewrite their IDs to
//! `{base_id}-{position}`. The suffix is the absolute position of the clone
//! in the caller's feed, so the same position always yields the same ID.

/// Separator between the base ID and the position suffix.
pub const SYNTHETIC_SEPARATOR: char = '-';

/// Format a synthetic ID, e.g. `synthetic_id("3", 7)` -> `"3-7"`.
#[must_use]
pub fn synthetic_id(base_id: &str, position: usize) -> String {
    format!("{base_id}{SYNTHETIC_SEPARATOR}{position}")
}

/// Split a synthetic ID into its base ID and numeric suffix.
///
/// Returns `None` when the ID has no numeric suffix. Base IDs may themselves
/// contain the separator; only the last segment is treated as the suffix.
#[must_use]
pub fn split_synthetic_id(id: &str) -> Option<(&str, usize)> {
    let (base, suffix) = id.rsplit_once(SYNTHETIC_SEPARATOR)?;
    if base.is_empty() {
        return None;
    }
    suffix.parse().ok().map(|position| (base, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_base_and_position() {
        assert_eq!(synthetic_id("12", 0), "12-0");
        assert_eq!(synthetic_id("idea-a", 19), "idea-a-19");
    }

    #[test]
    fn splits_on_last_separator() {
        assert_eq!(split_synthetic_id("12-5"), Some(("12", 5)));
        assert_eq!(split_synthetic_id("idea-a-19"), Some(("idea-a", 19)));
    }

    #[test]
    fn rejects_ids_without_numeric_suffix() {
        assert_eq!(split_synthetic_id("12"), None);
        assert_eq!(split_synthetic_id("idea-a"), None);
        assert_eq!(split_synthetic_id("-3"), None);
    }
}
