use lego_core::brick::{Brick, BrickBody, BrickMetadata, BrickType};
use lego_core::error::CoreError;
use lego_core::types::{EntityId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `bricks` table.
#[derive(Debug, Clone, FromRow)]
pub struct BrickRow {
    pub id: EntityId,
    #[sqlx(rename = "type")]
    pub brick_type: String,
    pub title: String,
    pub content: String,
    pub metadata: Option<Json<BrickMetadata>>,
    pub tags: Json<Vec<String>>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<BrickRow> for Brick {
    type Error = CoreError;

    fn try_from(row: BrickRow) -> Result<Self, Self::Error> {
        let brick_type: BrickType = row.brick_type.parse()?;
        Ok(Self {
            id: row.id,
            body: BrickBody::from_parts(brick_type, row.metadata.map(|m| m.0)),
            title: row.title,
            content: row.content,
            tags: row.tags.0,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
