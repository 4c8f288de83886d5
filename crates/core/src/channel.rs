//! Publishing channels and per-channel publish outcomes.
//!
//! Publishing itself is stubbed: a connected channel accepts any existing
//! composition and returns a receipt. Publishing to several channels yields
//! one [`PublishOutcome`] per channel so a failure is attributed to the
//! channel that caused it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Creator recorded on the built-in channels.
pub const SYSTEM_CREATOR: &str = "system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Wechat,
    Weibo,
    Linkedin,
    Instagram,
    Email,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Active,
    Inactive,
    Error,
}

impl ChannelType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wechat => "wechat",
            Self::Weibo => "weibo",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Email => "email",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ChannelType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wechat" => Ok(Self::Wechat),
            "weibo" => Ok(Self::Weibo),
            "linkedin" => Ok(Self::Linkedin),
            "instagram" => Ok(Self::Instagram),
            "email" => Ok(Self::Email),
            "custom" => Ok(Self::Custom),
            other => Err(CoreError::Validation(format!("Invalid channel type '{other}'"))),
        }
    }
}

impl ChannelStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
        }
    }

    /// Status implied by a connection flag.
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl FromStr for ChannelStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "error" => Ok(Self::Error),
            other => Err(CoreError::Validation(format!(
                "Invalid channel status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub connected: bool,
    pub status: ChannelStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Draft for `POST /channels`. Created channels are always custom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChannel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
}

impl NewChannel {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Channel name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for `PUT /channels/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChannelStatus>,
}

/// Result of `POST /channels/{id}/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTest {
    pub success: bool,
    pub message: String,
}

/// Body of `POST /channels/{id}/publish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub composition_id: EntityId,
}

/// Receipt returned by a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub success: bool,
    pub message: String,
    pub publish_id: String,
    pub published_at: Timestamp,
}

/// Outcome of publishing to one channel within a multi-channel publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcome {
    pub channel_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<PublishReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishOutcome {
    pub fn published(channel_id: impl Into<EntityId>, receipt: PublishReceipt) -> Self {
        Self {
            channel_id: channel_id.into(),
            receipt: Some(receipt),
            error: None,
        }
    }

    pub fn failed(channel_id: impl Into<EntityId>, error: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            receipt: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.receipt.is_some()
    }
}

impl Channel {
    /// A new disconnected custom channel.
    pub fn custom(
        id: impl Into<EntityId>,
        draft: NewChannel,
        created_by: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            channel_type: ChannelType::Custom,
            connected: false,
            status: ChannelStatus::Inactive,
            api_key: None,
            access_token: None,
            refresh_token: None,
            account_name: None,
            config_url: draft.config_url,
            description: draft.description,
            is_custom: true,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn system(
        id: &str,
        name: &str,
        channel_type: ChannelType,
        account_name: Option<&str>,
        now: Timestamp,
    ) -> Self {
        let connected = account_name.is_some();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            channel_type,
            connected,
            status: ChannelStatus::from_connected(connected),
            api_key: None,
            access_token: None,
            refresh_token: None,
            account_name: account_name.map(str::to_string),
            config_url: None,
            description: None,
            is_custom: false,
            created_by: SYSTEM_CREATOR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Setting `connected` also moves the status to
    /// active/inactive; an explicit `status` in the same update wins.
    pub fn apply_update(&mut self, update: ChannelUpdate, now: Timestamp) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(access_token) = update.access_token {
            self.access_token = Some(access_token);
        }
        if let Some(refresh_token) = update.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        if let Some(account_name) = update.account_name {
            self.account_name = Some(account_name);
        }
        if let Some(config_url) = update.config_url {
            self.config_url = Some(config_url);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(connected) = update.connected {
            self.connected = connected;
            self.status = ChannelStatus::from_connected(connected);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = now;
    }

    /// Stubbed connection check: passes iff both credentials are present.
    pub fn test_connection(&self) -> ConnectionTest {
        if self.api_key.is_some() && self.access_token.is_some() {
            ConnectionTest {
                success: true,
                message: "Connection test succeeded".to_string(),
            }
        } else {
            ConnectionTest {
                success: false,
                message: "Missing required credentials".to_string(),
            }
        }
    }

    /// Only custom channels may be deleted.
    pub fn ensure_deletable(&self) -> Result<(), CoreError> {
        if self.is_custom {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Cannot delete system channel '{}'",
                self.id
            )))
        }
    }

    /// Stubbed publish: a connected channel always accepts.
    pub fn publish(&self, now: Timestamp) -> Result<PublishReceipt, CoreError> {
        if !self.connected {
            return Err(CoreError::Validation(format!(
                "Channel '{}' is not connected",
                self.name
            )));
        }
        Ok(PublishReceipt {
            success: true,
            message: format!("Content published to {}", self.name),
            publish_id: format!("pub-{}", now.timestamp_millis()),
            published_at: now,
        })
    }
}

/// Id for a new custom channel: `channel-{n+1}` for `n` existing channels,
/// moving past any id still taken after earlier deletions.
pub fn next_custom_channel_id(existing: &[EntityId]) -> EntityId {
    let mut n = existing.len() + 1;
    loop {
        let id = format!("channel-{n}");
        if !existing.contains(&id) {
            return id;
        }
        n += 1;
    }
}

/// Built-in channels seeded into an empty channel list.
pub fn system_channels(now: Timestamp) -> Vec<Channel> {
    vec![
        Channel::system(
            "wechat",
            "WeChat Official Account",
            ChannelType::Wechat,
            Some("Content LEGO Official"),
            now,
        ),
        Channel::system("weibo", "Weibo", ChannelType::Weibo, None, now),
        Channel::system(
            "linkedin",
            "LinkedIn",
            ChannelType::Linkedin,
            Some("Content LEGO"),
            now,
        ),
        Channel::system("instagram", "Instagram", ChannelType::Instagram, None, now),
        Channel::system(
            "email",
            "Email Marketing",
            ChannelType::Email,
            Some("marketing@contentlego.com"),
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::now;
    use assert_matches::assert_matches;

    fn ids(raw: &[&str]) -> Vec<EntityId> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn custom() -> Channel {
        Channel::custom(
            next_custom_channel_id(&ids(&["wechat", "weibo", "linkedin", "instagram", "email"])),
            NewChannel {
                name: "Blog".into(),
                description: None,
                config_url: Some("https://blog.example.com/hook".into()),
            },
            "user",
            now(),
        )
    }

    #[test]
    fn test_custom_channel_defaults() {
        let c = custom();
        assert_eq!(c.id, "channel-6");
        assert_eq!(c.channel_type, ChannelType::Custom);
        assert!(!c.connected);
        assert_eq!(c.status, ChannelStatus::Inactive);
        assert!(c.is_custom);
    }

    #[test]
    fn test_custom_id_skips_taken() {
        assert_eq!(next_custom_channel_id(&[]), "channel-1");
        let taken = ids(&["wechat", "channel-3", "channel-4"]);
        assert_eq!(next_custom_channel_id(&taken), "channel-5");
    }

    #[test]
    fn test_system_channels_seed() {
        let channels = system_channels(now());
        assert_eq!(channels.len(), 5);
        let connected: Vec<&str> = channels
            .iter()
            .filter(|c| c.connected)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(connected, ["wechat", "linkedin", "email"]);
        assert!(channels.iter().all(|c| c.ensure_deletable().is_err()));
    }

    #[test]
    fn test_connected_update_sets_status() {
        let mut c = custom();
        c.apply_update(
            ChannelUpdate {
                connected: Some(true),
                ..Default::default()
            },
            now(),
        );
        assert_eq!(c.status, ChannelStatus::Active);

        c.apply_update(
            ChannelUpdate {
                connected: Some(false),
                status: Some(ChannelStatus::Error),
                ..Default::default()
            },
            now(),
        );
        assert!(!c.connected);
        assert_eq!(c.status, ChannelStatus::Error);
    }

    #[test]
    fn test_connection_requires_both_credentials() {
        let mut c = custom();
        assert!(!c.test_connection().success);
        c.api_key = Some("key".into());
        assert!(!c.test_connection().success);
        c.access_token = Some("token".into());
        assert!(c.test_connection().success);
    }

    #[test]
    fn test_publish_requires_connection() {
        let mut c = custom();
        assert_matches!(c.publish(now()), Err(CoreError::Validation(_)));
        c.connected = true;
        let receipt = c.publish(now()).unwrap();
        assert!(receipt.success);
        assert!(receipt.publish_id.starts_with("pub-"));
    }

    #[test]
    fn test_publish_outcome_wire_format() {
        let failed = serde_json::to_value(PublishOutcome::failed("weibo", "not connected")).unwrap();
        assert_eq!(failed["channelId"], "weibo");
        assert_eq!(failed["error"], "not connected");
        assert!(failed.get("receipt").is_none());
    }
}
