use lego_core::brick::Brick;
use lego_core::template::{Template, TemplateVariable};
use lego_core::types::{EntityId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateRow {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub bricks: Json<Vec<Brick>>,
    pub category: String,
    pub is_public: bool,
    pub variables: Json<Vec<TemplateVariable>>,
    pub tags: Json<Vec<String>>,
    pub usage_count: i64,
    pub rating: f64,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TemplateRow> for Template {
    fn from(row: TemplateRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            bricks: row.bricks.0,
            category: row.category,
            is_public: row.is_public,
            variables: row.variables.0,
            tags: row.tags.0,
            usage_count: row.usage_count,
            rating: row.rating,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
