//! Repository for the `bricks` table.

use lego_core::brick::{Brick, BrickUpdate, NewBrick};
use lego_core::types::now;
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};

use crate::decode_error;
use crate::models::BrickRow;

/// Column list for bricks queries.
const COLUMNS: &str = "id, type, title, content, metadata, tags, version, created_at, updated_at";

pub struct BrickRepo;

impl BrickRepo {
    /// List all bricks, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Brick>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bricks ORDER BY created_at DESC, rowid DESC");
        let rows = sqlx::query_as::<_, BrickRow>(&query)
            .fetch_all(pool)
            .await?;
        rows.into_iter()
            .map(|row| Brick::try_from(row).map_err(decode_error))
            .collect()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Brick>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        find(&mut conn, id).await
    }

    /// Create a version-1 brick from a draft.
    pub async fn create(pool: &SqlitePool, draft: NewBrick) -> Result<Brick, sqlx::Error> {
        let brick = Brick::create(draft, now());
        Self::insert(pool, &brick).await?;
        Ok(brick)
    }

    /// Insert an already materialised brick, keeping its id and timestamps.
    pub async fn insert(pool: &SqlitePool, brick: &Brick) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO bricks (id, type, title, content, metadata, tags, version, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&brick.id)
        .bind(brick.brick_type().as_str())
        .bind(&brick.title)
        .bind(&brick.content)
        .bind(brick.body.metadata().map(Json))
        .bind(Json(&brick.tags))
        .bind(brick.version)
        .bind(brick.created_at)
        .bind(brick.updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Apply a partial update, bumping the version. `None` if absent.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        update: BrickUpdate,
    ) -> Result<Option<Brick>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut brick) = find(&mut tx, id).await? else {
            return Ok(None);
        };
        brick.apply_update(update, now());

        sqlx::query(
            "UPDATE bricks SET title = ?, content = ?, metadata = ?, tags = ?, version = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&brick.title)
        .bind(&brick.content)
        .bind(brick.body.metadata().map(Json))
        .bind(Json(&brick.tags))
        .bind(brick.version)
        .bind(brick.updated_at)
        .bind(&brick.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(brick))
    }

    /// Delete a brick by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bricks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bricks")
            .fetch_one(pool)
            .await
    }
}

async fn find(conn: &mut SqliteConnection, id: &str) -> Result<Option<Brick>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM bricks WHERE id = ?");
    sqlx::query_as::<_, BrickRow>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .map(|row| Brick::try_from(row).map_err(decode_error))
        .transpose()
}
