//! Repository for the `channels` table.

use lego_core::channel::{next_custom_channel_id, Channel, ChannelUpdate, NewChannel};
use lego_core::types::now;
use sqlx::{SqliteConnection, SqlitePool};

use crate::decode_error;
use crate::models::ChannelRow;

/// Column list for channels queries.
const COLUMNS: &str = "id, name, type, connected, status, api_key, access_token, refresh_token, \
                       account_name, config_url, description, is_custom, created_by, created_at, updated_at";

pub struct ChannelRepo;

impl ChannelRepo {
    /// List all channels in creation order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Channel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM channels ORDER BY created_at ASC, rowid ASC");
        let rows = sqlx::query_as::<_, ChannelRow>(&query)
            .fetch_all(pool)
            .await?;
        rows.into_iter()
            .map(|row| Channel::try_from(row).map_err(decode_error))
            .collect()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Channel>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        find(&mut conn, id).await
    }

    /// Create a disconnected custom channel with the next `channel-{n}` id.
    ///
    /// The write lock is taken before the ids are read so concurrent
    /// creates serialise instead of allocating the same id.
    pub async fn create_custom(
        pool: &SqlitePool,
        draft: NewChannel,
        created_by: &str,
    ) -> Result<Channel, sqlx::Error> {
        let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM channels")
            .fetch_all(&mut *tx)
            .await?;
        let channel = Channel::custom(next_custom_channel_id(&ids), draft, created_by, now());
        insert(&mut tx, &channel).await?;
        tx.commit().await?;
        Ok(channel)
    }

    /// Insert an already materialised channel.
    pub async fn insert(pool: &SqlitePool, channel: &Channel) -> Result<(), sqlx::Error> {
        let mut conn = pool.acquire().await?;
        insert(&mut conn, channel).await
    }

    /// Apply a partial update. `None` if absent.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        update: ChannelUpdate,
    ) -> Result<Option<Channel>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut channel) = find(&mut tx, id).await? else {
            return Ok(None);
        };
        channel.apply_update(update, now());

        sqlx::query(
            "UPDATE channels SET name = ?, connected = ?, status = ?, api_key = ?, access_token = ?,
                                 refresh_token = ?, account_name = ?, config_url = ?, description = ?,
                                 updated_at = ?
             WHERE id = ?",
        )
        .bind(&channel.name)
        .bind(channel.connected)
        .bind(channel.status.as_str())
        .bind(&channel.api_key)
        .bind(&channel.access_token)
        .bind(&channel.refresh_token)
        .bind(&channel.account_name)
        .bind(&channel.config_url)
        .bind(&channel.description)
        .bind(channel.updated_at)
        .bind(&channel.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(channel))
    }

    /// Delete a channel by ID. Returns `true` if a row was deleted.
    ///
    /// Callers check [`Channel::ensure_deletable`] first.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM channels WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM channels")
            .fetch_one(pool)
            .await
    }
}

async fn find(conn: &mut SqliteConnection, id: &str) -> Result<Option<Channel>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM channels WHERE id = ?");
    sqlx::query_as::<_, ChannelRow>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .map(|row| Channel::try_from(row).map_err(decode_error))
        .transpose()
}

async fn insert(conn: &mut SqliteConnection, channel: &Channel) -> Result<(), sqlx::Error> {
    let query = format!(
        "INSERT INTO channels ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    );
    sqlx::query(&query)
        .bind(&channel.id)
        .bind(&channel.name)
        .bind(channel.channel_type.as_str())
        .bind(channel.connected)
        .bind(channel.status.as_str())
        .bind(&channel.api_key)
        .bind(&channel.access_token)
        .bind(&channel.refresh_token)
        .bind(&channel.account_name)
        .bind(&channel.config_url)
        .bind(&channel.description)
        .bind(channel.is_custom)
        .bind(&channel.created_by)
        .bind(channel.created_at)
        .bind(channel.updated_at)
        .execute(conn)
        .await?;
    Ok(())
}
