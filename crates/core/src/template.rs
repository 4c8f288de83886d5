//! Content templates: reusable brick sequences a composition can be seeded from.

use serde::{Deserialize, Serialize};

use crate::brick::Brick;
use crate::error::CoreError;
use crate::types::{new_id, EntityId, Timestamp};

/// Kind of value a template variable accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Text,
    Image,
    Link,
    Date,
}

/// A placeholder declared by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub bricks: Vec<Brick>,
    pub category: String,
    pub is_public: bool,
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub rating: f64,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Display-only back-reference from a builder to the template it was seeded
/// from. Never re-synced with the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    pub id: EntityId,
    pub name: String,
}

impl Template {
    pub fn create(draft: NewTemplate, created_by: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            name: draft.name,
            description: draft.description,
            bricks: draft.bricks,
            category: draft.category,
            is_public: draft.is_public,
            variables: draft.variables,
            tags: draft.tags,
            usage_count: 0,
            rating: 0.0,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_ref(&self) -> TemplateRef {
        TemplateRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    pub fn apply_update(&mut self, update: TemplateUpdate, now: Timestamp) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(bricks) = update.bricks {
            self.bricks = bricks;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        if let Some(variables) = update.variables {
            self.variables = variables;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }
}

/// Draft for `POST /templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub bricks: Vec<Brick>,
    pub category: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewTemplate {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Template name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for `PUT /templates/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bricks: Option<Vec<Brick>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
