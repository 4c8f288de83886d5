use lego_core::channel::{Channel, ChannelStatus, ChannelType};
use lego_core::error::CoreError;
use lego_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `channels` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChannelRow {
    pub id: EntityId,
    pub name: String,
    #[sqlx(rename = "type")]
    pub channel_type: String,
    pub connected: bool,
    pub status: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub account_name: Option<String>,
    pub config_url: Option<String>,
    pub description: Option<String>,
    pub is_custom: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ChannelRow> for Channel {
    type Error = CoreError;

    fn try_from(row: ChannelRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            channel_type: row.channel_type.parse::<ChannelType>()?,
            connected: row.connected,
            status: row.status.parse::<ChannelStatus>()?,
            api_key: row.api_key,
            access_token: row.access_token,
            refresh_token: row.refresh_token,
            account_name: row.account_name,
            config_url: row.config_url,
            description: row.description,
            is_custom: row.is_custom,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
