use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ContentBlock;
use crate::ids::synthetic_id;

/// A business idea as shown in the feeds and on the detail page.
///
/// `score` is an authoring-time ranking signal and never recomputed.
/// `votes` is only ever changed ephemerally by a viewer (see `VoteState`).
/// The `featured`, `trending` and `for_you` flags are set when the catalog is
/// authored and feed the segment classifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display name, not a user reference.
    pub author: String,
    pub score: i64,
    pub votes: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_you: Option<bool>,
}

impl Idea {
    #[must_use]
    pub const fn has_video(&self) -> bool {
        self.video.is_some()
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }

    #[must_use]
    pub fn is_for_you(&self) -> bool {
        self.for_you == Some(true)
    }

    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.trending == Some(true)
    }

    /// Clone this idea under the synthetic ID for feed position `position`.
    #[must_use]
    pub fn synthesize(&self, position: usize) -> Self {
        Self {
            id: synthetic_id(&self.id, position),
            ..self.clone()
        }
    }

    /// First `max` tags in authoring order.
    #[must_use]
    pub fn display_tags(&self, max: usize) -> &[String] {
        &self.tags[..self.tags.len().min(max)]
    }

    /// Parsed creation time, if `created_at` is RFC 3339 or a bare date.
    ///
    /// Doubles as the recency sort key: `None` compares below every parsed
    /// time, and equal instants compare equal however they are spelled.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn idea(created_at: &str) -> Idea {
        Idea {
            id: "7".into(),
            title: "Smart Home Energy Manager".into(),
            description: "IoT energy optimisation.".into(),
            author: "Maria Garcia".into(),
            score: 77,
            votes: 48,
            tags: vec!["IoT".into(), "Sustainability".into(), "Smart Home".into()],
            created_at: created_at.into(),
            image: None,
            video: Some("https://example.com/v.mp4".into()),
            content: None,
            featured: None,
            trending: Some(true),
            for_you: Some(false),
        }
    }

    #[test]
    fn deserializes_camel_case_catalog_shape() {
        let json = r#"{
            "id": "2",
            "title": "Sustainable Fashion Marketplace",
            "description": "Eco-conscious fashion.",
            "author": "Michael Rodriguez",
            "score": 75,
            "votes": 32,
            "tags": ["Fashion"],
            "createdAt": "2024-01-14",
            "video": "https://example.com/bunny.mp4",
            "forYou": true
        }"#;
        let parsed: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.created_at, "2024-01-14");
        assert!(parsed.is_for_you());
        assert!(!parsed.is_featured());
        assert!(parsed.has_video());
        assert!(parsed.content.is_none());
    }

    #[test]
    fn synthesize_rewrites_only_the_id() {
        let base = idea("2024-01-09");
        let clone = base.synthesize(12);
        assert_eq!(clone.id, "7-12");
        assert_eq!(clone.title, base.title);
        assert_eq!(clone.tags, base.tags);
    }

    #[test]
    fn display_tags_truncates_in_order() {
        let base = idea("2024-01-09");
        assert_eq!(base.display_tags(2), ["IoT", "Sustainability"]);
        assert_eq!(base.display_tags(10).len(), 3);
    }

    #[test]
    fn parses_dates_and_rfc3339() {
        assert!(idea("2024-01-09").created_at_utc().is_some());
        assert!(idea("2024-01-09T10:30:00Z").created_at_utc().is_some());
        assert!(idea("last tuesday").created_at_utc().is_none());
        assert!(idea("2024-01-09T10:30:00Z").created_at_utc() > idea("2024-01-09").created_at_utc());
        assert!(idea("2000-01-01").created_at_utc() > idea("zzz").created_at_utc());
        assert_eq!(
            idea("2024-01-09").created_at_utc(),
            idea("2024-01-09T00:00:00Z").created_at_utc()
        );
    }
}
