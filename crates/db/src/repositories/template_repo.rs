//! Repository for the `templates` table.

use lego_core::template::{NewTemplate, Template, TemplateUpdate};
use lego_core::types::now;
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::TemplateRow;

/// Column list for templates queries.
const COLUMNS: &str = "id, name, description, bricks, category, is_public, variables, tags, \
                       usage_count, rating, created_by, created_at, updated_at";

pub struct TemplateRepo;

impl TemplateRepo {
    /// List all templates, most used first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates ORDER BY usage_count DESC, created_at DESC"
        );
        let rows = sqlx::query_as::<_, TemplateRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Template::from).collect())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Template>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        find(&mut conn, id).await
    }

    pub async fn create(
        pool: &SqlitePool,
        draft: NewTemplate,
        created_by: &str,
    ) -> Result<Template, sqlx::Error> {
        let template = Template::create(draft, created_by, now());
        sqlx::query(
            "INSERT INTO templates (id, name, description, bricks, category, is_public, variables, tags,
                                    usage_count, rating, created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&template.id)
        .bind(&template.name)
        .bind(&template.description)
        .bind(Json(&template.bricks))
        .bind(&template.category)
        .bind(template.is_public)
        .bind(Json(&template.variables))
        .bind(Json(&template.tags))
        .bind(template.usage_count)
        .bind(template.rating)
        .bind(&template.created_by)
        .bind(template.created_at)
        .bind(template.updated_at)
        .execute(pool)
        .await?;
        Ok(template)
    }

    /// Apply a partial update. `None` if absent.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        update: TemplateUpdate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut template) = find(&mut tx, id).await? else {
            return Ok(None);
        };
        template.apply_update(update, now());
        save(&mut tx, &template).await?;
        tx.commit().await?;
        Ok(Some(template))
    }

    /// Increment the usage counter, returning the new count. `None` if absent.
    pub async fn record_use(pool: &SqlitePool, id: &str) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE templates SET usage_count = usage_count + 1, updated_at = ?
             WHERE id = ?
             RETURNING usage_count",
        )
        .bind(now())
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a template by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM templates")
            .fetch_one(pool)
            .await
    }
}

async fn find(conn: &mut SqliteConnection, id: &str) -> Result<Option<Template>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM templates WHERE id = ?");
    let row = sqlx::query_as::<_, TemplateRow>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row.map(Template::from))
}

async fn save(conn: &mut SqliteConnection, template: &Template) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE templates SET name = ?, description = ?, bricks = ?, category = ?, is_public = ?,
                              variables = ?, tags = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(&template.name)
    .bind(&template.description)
    .bind(Json(&template.bricks))
    .bind(&template.category)
    .bind(template.is_public)
    .bind(Json(&template.variables))
    .bind(Json(&template.tags))
    .bind(template.updated_at)
    .bind(&template.id)
    .execute(conn)
    .await?;
    Ok(())
}
