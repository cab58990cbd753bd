//! Segment classifier.
//!
//! Partitions a slice of ideas into the three disjoint segments. Every
//! selector is pure and uses a stable sort, so ideas that tie on the sort key
//! keep their catalog order.

use mvo_core::entities::Idea;
use mvo_core::enums::Segment;

/// The single segment an idea belongs to, if any.
///
/// An idea flagged both `featured` and `forYou` belongs to no segment, and
/// neither does a featured idea without video.
#[must_use]
pub fn classify(idea: &Idea) -> Option<Segment> {
    match (idea.is_featured(), idea.is_for_you(), idea.has_video()) {
        (true, false, true) => Some(Segment::Featured),
        (false, true, _) => Some(Segment::ForYou),
        (false, false, true) => Some(Segment::Explore),
        _ => None,
    }
}

/// Featured ideas with video that are not for-you, highest score first.
#[must_use]
pub fn select_featured(ideas: &[Idea]) -> Vec<Idea> {
    let mut selected = select(ideas, Segment::Featured);
    selected.sort_by(|a, b| b.score.cmp(&a.score));
    selected
}

/// For-you ideas that are not featured, highest score first.
#[must_use]
pub fn select_for_you(ideas: &[Idea]) -> Vec<Idea> {
    let mut selected = select(ideas, Segment::ForYou);
    selected.sort_by(|a, b| b.score.cmp(&a.score));
    selected
}

/// Ideas with video that are neither featured nor for-you, newest first.
#[must_use]
pub fn select_explore(ideas: &[Idea]) -> Vec<Idea> {
    let mut selected = select(ideas, Segment::Explore);
    selected.sort_by(|a, b| b.created_at_utc().cmp(&a.created_at_utc()));
    selected
}

/// Dispatch to the selector for `segment`.
#[must_use]
pub fn select_segment(ideas: &[Idea], segment: Segment) -> Vec<Idea> {
    match segment {
        Segment::Featured => select_featured(ideas),
        Segment::ForYou => select_for_you(ideas),
        Segment::Explore => select_explore(ideas),
    }
}

fn select(ideas: &[Idea], segment: Segment) -> Vec<Idea> {
    ideas
        .iter()
        .filter(|idea| classify(idea) == Some(segment))
        .cloned()
        .collect()
}
