use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::enums::{ButtonVariant, TextSize};
use crate::errors::CoreError;

/// Heading level for a heading block. Only 1 through 4 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CoreError::Validation(format!(
                "heading level must be between {} and {}, got {level}",
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl JsonSchema for HeadingLevel {
    fn schema_name() -> Cow<'static, str> {
        "HeadingLevel".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 4
        })
    }
}

/// A single slide inside a carousel block.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CarouselSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
}

/// Rich content block rendered on the idea detail page.
///
/// The set is closed: renderers match exhaustively, and a new block kind is
/// added here rather than inferred from which fields happen to be present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<TextSize>,
    },
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Carousel {
        slides: Vec<CarouselSlide>,
    },
    Button {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        #[serde(rename = "onClick", default, skip_serializing_if = "Option::is_none")]
        on_click: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<ButtonVariant>,
    },
    /// Raw markup, rendered as-is.
    Html {
        content: String,
    },
    Spacer {
        height: u32,
    },
}

impl ContentBlock {
    /// The `type` tag this block serializes with.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Heading { .. } => "heading",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Carousel { .. } => "carousel",
            Self::Button { .. } => "button",
            Self::Html { .. } => "html",
            Self::Spacer { .. } => "spacer",
        }
    }

    /// Every image or video URL referenced by this block, in display order.
    #[must_use]
    pub fn media_sources(&self) -> Vec<&str> {
        match self {
            Self::Image { src, .. } | Self::Video { src, .. } => vec![src.as_str()],
            Self::Carousel { slides } => slides
                .iter()
                .flat_map(|slide| slide.image.iter().chain(slide.video.iter()))
                .map(String::as_str)
                .collect(),
            Self::Text { .. }
            | Self::Heading { .. }
            | Self::Button { .. }
            | Self::Html { .. }
            | Self::Spacer { .. } => Vec::new(),
        }
    }

    /// Plain-text summary used for previews and table output.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Text { content, .. } | Self::Html { content } => content.clone(),
            Self::Heading { level, text } => format!("h{} {text}", level.get()),
            Self::Image { alt, .. } => alt.clone(),
            Self::Video { src, title, .. } => title.clone().unwrap_or_else(|| src.clone()),
            Self::Carousel { slides } => format!("{} slides", slides.len()),
            Self::Button { text, .. } => text.clone(),
            Self::Spacer { height } => format!("{height}px"),
        }
    }
}
