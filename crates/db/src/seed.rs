//! Starter data written into an empty database.

use lego_core::channel::system_channels;
use lego_core::library::sample_bricks;
use lego_core::types::now;

use crate::repositories::{BrickRepo, ChannelRepo};
use crate::DbPool;

/// Seed the built-in channels and sample bricks into empty tables.
///
/// Each table is seeded independently and only when it has no rows, so this
/// is safe to call on every startup.
pub async fn seed_if_empty(pool: &DbPool) -> Result<(), sqlx::Error> {
    let now = now();

    if ChannelRepo::count(pool).await? == 0 {
        let channels = system_channels(now);
        for channel in &channels {
            ChannelRepo::insert(pool, channel).await?;
        }
        tracing::info!(count = channels.len(), "Seeded system channels");
    }

    if BrickRepo::count(pool).await? == 0 {
        let bricks = sample_bricks(now);
        for brick in &bricks {
            BrickRepo::insert(pool, brick).await?;
        }
        tracing::info!(count = bricks.len(), "Seeded sample bricks");
    }

    Ok(())
}
