//! Content bricks: the typed units a composition is assembled from.
//!
//! On the wire a brick carries a `type` tag plus a loose `metadata` object
//! (`description`, `imageUrl`, `linkUrl`, `buttonText`). In memory the
//! metadata is a [`BrickBody`] variant keyed by type, so each brick only
//! carries the side fields that are meaningful for it. Conversion between
//! the two happens in the serde layer via [`BrickRecord`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Brick type
// ---------------------------------------------------------------------------

/// The closed set of brick types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickType {
    Text,
    Image,
    Cta,
    Faq,
    Quote,
    Video,
}

/// All brick types, in library display order.
pub const ALL_BRICK_TYPES: &[BrickType] = &[
    BrickType::Text,
    BrickType::Image,
    BrickType::Cta,
    BrickType::Faq,
    BrickType::Quote,
    BrickType::Video,
];

impl BrickType {
    /// Wire / database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Cta => "cta",
            Self::Faq => "faq",
            Self::Quote => "quote",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for BrickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrickType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BRICK_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid brick type '{s}'. Must be one of: text, image, cta, faq, quote, video"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Wire form of a brick's optional side fields.
///
/// Absent fields fall back to the brick's `content` when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

impl BrickMetadata {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.image_url.is_none()
            && self.link_url.is_none()
            && self.button_text.is_none()
    }
}

/// Type tag plus the side fields valid for that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrickBody {
    Text {
        description: Option<String>,
    },
    Image {
        image_url: Option<String>,
        description: Option<String>,
    },
    Cta {
        button_text: Option<String>,
        link_url: Option<String>,
        description: Option<String>,
    },
    Faq {
        description: Option<String>,
    },
    Quote {
        description: Option<String>,
    },
    Video {
        link_url: Option<String>,
        description: Option<String>,
    },
}

impl BrickBody {
    /// Build a body for `brick_type`, keeping only the metadata fields that
    /// type understands. Empty strings are treated as absent.
    pub fn from_parts(brick_type: BrickType, metadata: Option<BrickMetadata>) -> Self {
        let m = metadata.unwrap_or_default();
        let description = non_empty(m.description);
        match brick_type {
            BrickType::Text => Self::Text { description },
            BrickType::Image => Self::Image {
                image_url: non_empty(m.image_url),
                description,
            },
            BrickType::Cta => Self::Cta {
                button_text: non_empty(m.button_text),
                link_url: non_empty(m.link_url),
                description,
            },
            BrickType::Faq => Self::Faq { description },
            BrickType::Quote => Self::Quote { description },
            BrickType::Video => Self::Video {
                link_url: non_empty(m.link_url),
                description,
            },
        }
    }

    /// A body of the given type with no side fields.
    pub fn empty(brick_type: BrickType) -> Self {
        Self::from_parts(brick_type, None)
    }

    pub fn brick_type(&self) -> BrickType {
        match self {
            Self::Text { .. } => BrickType::Text,
            Self::Image { .. } => BrickType::Image,
            Self::Cta { .. } => BrickType::Cta,
            Self::Faq { .. } => BrickType::Faq,
            Self::Quote { .. } => BrickType::Quote,
            Self::Video { .. } => BrickType::Video,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Text { description }
            | Self::Image { description, .. }
            | Self::Cta { description, .. }
            | Self::Faq { description }
            | Self::Quote { description }
            | Self::Video { description, .. } => description.as_deref(),
        }
    }

    /// Flatten back to the wire form. Returns `None` when no field is set.
    pub fn metadata(&self) -> Option<BrickMetadata> {
        let m = match self.clone() {
            Self::Text { description } | Self::Faq { description } | Self::Quote { description } => {
                BrickMetadata {
                    description,
                    ..Default::default()
                }
            }
            Self::Image {
                image_url,
                description,
            } => BrickMetadata {
                description,
                image_url,
                ..Default::default()
            },
            Self::Cta {
                button_text,
                link_url,
                description,
            } => BrickMetadata {
                description,
                link_url,
                button_text,
                ..Default::default()
            },
            Self::Video {
                link_url,
                description,
            } => BrickMetadata {
                description,
                link_url,
                ..Default::default()
            },
        };
        (!m.is_empty()).then_some(m)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Brick
// ---------------------------------------------------------------------------

/// A single typed content unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BrickRecord", into = "BrickRecord")]
pub struct Brick {
    pub id: EntityId,
    pub body: BrickBody,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Starts at 1, incremented by the repository on every persisted update.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire shape of a [`Brick`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickRecord {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub brick_type: BrickType,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BrickMetadata>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "initial_version")]
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn initial_version() -> i64 {
    1
}

impl From<BrickRecord> for Brick {
    fn from(r: BrickRecord) -> Self {
        Self {
            id: r.id,
            body: BrickBody::from_parts(r.brick_type, r.metadata),
            title: r.title,
            content: r.content,
            tags: r.tags,
            version: r.version,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<Brick> for BrickRecord {
    fn from(b: Brick) -> Self {
        Self {
            id: b.id,
            brick_type: b.body.brick_type(),
            metadata: b.body.metadata(),
            title: b.title,
            content: b.content,
            tags: b.tags,
            version: b.version,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

impl Brick {
    /// Materialise a draft as a version-1 brick with a fresh id.
    pub fn create(draft: NewBrick, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            body: BrickBody::from_parts(draft.brick_type, draft.metadata),
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn brick_type(&self) -> BrickType {
        self.body.brick_type()
    }

    /// A by-value copy carrying a freshly generated id.
    ///
    /// Used whenever a library or template brick is placed into a
    /// composition, so two placements of the same source never share an id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_id(),
            ..self.clone()
        }
    }

    /// Apply a partial update and bump the version.
    pub fn apply_update(&mut self, update: BrickUpdate, now: Timestamp) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(metadata) = update.metadata {
            self.body = BrickBody::from_parts(self.brick_type(), Some(metadata));
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.version += 1;
        self.updated_at = now;
    }

    /// Label shown on a CTA button: `buttonText` if set, else `content`.
    pub fn button_label(&self) -> &str {
        match &self.body {
            BrickBody::Cta {
                button_text: Some(text),
                ..
            } => text,
            _ => &self.content,
        }
    }

    /// Whether the brick matches a lowercase search needle on content or tags.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.content.to_lowercase().contains(needle_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower))
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Draft for `POST /bricks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrick {
    #[serde(rename = "type")]
    pub brick_type: BrickType,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BrickMetadata>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewBrick {
    pub fn new(brick_type: BrickType, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            brick_type,
            title: title.into(),
            content: content.into(),
            metadata: None,
            tags: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: BrickMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for `PUT /bricks/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BrickMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
