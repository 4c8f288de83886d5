//! Repository for the `compositions` table.

use lego_core::composition::{Composition, NewComposition};
use lego_core::types::now;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::CompositionRow;

/// Column list for compositions queries.
const COLUMNS: &str =
    "id, name, description, bricks, category, tags, created_by, created_at, updated_at";

pub struct CompositionRepo;

impl CompositionRepo {
    /// List all compositions, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Composition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM compositions ORDER BY created_at DESC, rowid DESC");
        let rows = sqlx::query_as::<_, CompositionRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Composition::from).collect())
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<Composition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM compositions WHERE id = ?");
        let row = sqlx::query_as::<_, CompositionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Composition::from))
    }

    /// Persist a draft. The caller validates it first.
    pub async fn create(
        pool: &SqlitePool,
        draft: NewComposition,
        created_by: &str,
    ) -> Result<Composition, sqlx::Error> {
        let composition = Composition::create(draft, created_by, now());
        sqlx::query(
            "INSERT INTO compositions (id, name, description, bricks, category, tags, created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&composition.id)
        .bind(&composition.name)
        .bind(&composition.description)
        .bind(Json(&composition.bricks))
        .bind(&composition.category)
        .bind(Json(&composition.tags))
        .bind(&composition.created_by)
        .bind(composition.created_at)
        .bind(composition.updated_at)
        .execute(pool)
        .await?;
        Ok(composition)
    }

    /// Delete a composition by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM compositions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM compositions")
            .fetch_one(pool)
            .await
    }
}
