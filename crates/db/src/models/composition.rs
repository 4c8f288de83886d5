use lego_core::brick::Brick;
use lego_core::composition::Composition;
use lego_core::types::{EntityId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `compositions` table.
#[derive(Debug, Clone, FromRow)]
pub struct CompositionRow {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub bricks: Json<Vec<Brick>>,
    pub category: String,
    pub tags: Json<Vec<String>>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CompositionRow> for Composition {
    fn from(row: CompositionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            bricks: row.bricks.0,
            category: row.category,
            tags: row.tags.0,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
