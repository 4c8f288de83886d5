//! Composition model: the ordered brick sequence behind one document.
//!
//! The sequence index is the only ordering key. Every mutation that
//! references a stale index or id is absorbed as a no-op so the editing
//! surface stays resilient to out-of-date positions.

use serde::{Deserialize, Serialize};

use crate::brick::{Brick, BrickBody, BrickMetadata};
use crate::error::CoreError;
use crate::types::{new_id, EntityId, Timestamp};

/// Default category for a saved composition.
pub const DEFAULT_CATEGORY: &str = "default";

/// Ordered, by-value sequence of bricks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionModel {
    bricks: Vec<Brick>,
}

impl CompositionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from existing bricks, copying each with a fresh id.
    pub fn from_bricks<'a>(bricks: impl IntoIterator<Item = &'a Brick>) -> Self {
        Self {
            bricks: bricks.into_iter().map(Brick::duplicate).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.bricks.iter().position(|b| b.id == id)
    }

    /// Append a copy of `brick` carrying a fresh id. The source is untouched.
    pub fn append(&mut self, brick: &Brick) -> &Brick {
        self.bricks.push(brick.duplicate());
        &self.bricks[self.bricks.len() - 1]
    }

    /// Remove the brick at `index`. Out of bounds is a no-op returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<Brick> {
        (index < self.bricks.len()).then(|| self.bricks.remove(index))
    }

    /// Move the brick at `from` so it ends up at `to`.
    ///
    /// Returns `false` without touching the sequence when `from == to` or
    /// either index is out of bounds.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.bricks.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let moved = self.bricks.remove(from);
        self.bricks.insert(to, moved);
        true
    }

    /// Move the brick with id `active` to the position of the brick with id
    /// `over`. Unresolvable ids are a no-op.
    pub fn reorder_by_id(&mut self, active: &str, over: &str) -> Option<(usize, usize)> {
        let from = self.index_of(active)?;
        let to = self.index_of(over)?;
        self.reorder(from, to).then_some((from, to))
    }

    /// Replace the content (and optionally the metadata) of the brick at
    /// `index` in place. Id, type and position are unchanged.
    pub fn edit_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
        metadata: Option<BrickMetadata>,
    ) -> bool {
        let Some(brick) = self.bricks.get_mut(index) else {
            return false;
        };
        brick.content = content.into();
        if let Some(metadata) = metadata {
            brick.body = BrickBody::from_parts(brick.brick_type(), Some(metadata));
        }
        true
    }

    pub fn clear(&mut self) {
        self.bricks.clear();
    }

    /// Read-only view of the ordered sequence.
    pub fn to_document(&self) -> &[Brick] {
        &self.bricks
    }
}

// ---------------------------------------------------------------------------
// Persisted composition
// ---------------------------------------------------------------------------

/// A named, saved composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub bricks: Vec<Brick>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Composition {
    pub fn create(draft: NewComposition, created_by: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            name: draft.name,
            description: draft.description,
            bricks: draft.bricks,
            category: draft.category,
            tags: draft.tags,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Draft for `POST /compositions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComposition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub bricks: Vec<Brick>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl NewComposition {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)
    }
}

/// A composition name must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Composition name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Parse a comma-separated tag string, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
