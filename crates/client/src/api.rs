//! REST client for the Content LEGO backend.
//!
//! Wraps every backend route with a typed method using [`reqwest`]. Request
//! and response bodies are the shared `lego_core` types.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use lego_core::brick::{Brick, BrickType, BrickUpdate, NewBrick};
use lego_core::channel::{
    Channel, ChannelUpdate, ConnectionTest, NewChannel, PublishOutcome, PublishReceipt,
    PublishRequest,
};
use lego_core::composition::{Composition, NewComposition};
use lego_core::generation::{
    GeneratedContent, GenerationRequest, RewriteRequest, SaveAsBrickRequest,
};
use lego_core::template::{NewTemplate, Template, TemplateUpdate};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for one backend instance.
#[derive(Debug, Clone)]
pub struct ContentLegoClient {
    client: reqwest::Client,
    base_url: Url,
}

/// `{"message": ...}` acknowledgement returned by deletes.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Response of `POST /templates/{id}/use`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUse {
    pub message: String,
    pub usage_count: i64,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
    pub bricks_count: i64,
    pub templates_count: i64,
    pub compositions_count: i64,
}

impl ContentLegoClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(client, &config.api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// Fails when `api_url` is not an absolute `http(s)` base URL.
    pub fn with_client(client: reqwest::Client, api_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(api_url).map_err(|e| ClientError::InvalidUrl(format!("{api_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(api_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn api_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(&["health"]).await
    }

    // ---- bricks ----

    /// List bricks, optionally filtered by type and a search term.
    pub async fn list_bricks(
        &self,
        brick_type: Option<BrickType>,
        search: Option<&str>,
    ) -> Result<Vec<Brick>, ClientError> {
        let mut query = Vec::new();
        if let Some(t) = brick_type {
            query.push(("type", t.as_str()));
        }
        if let Some(s) = search {
            query.push(("search", s));
        }
        let response = self
            .client
            .get(self.url(&["bricks"]))
            .query(&query)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn get_brick(&self, id: &str) -> Result<Brick, ClientError> {
        self.get_json(&["bricks", id]).await
    }

    pub async fn create_brick(&self, draft: &NewBrick) -> Result<Brick, ClientError> {
        self.post_json(&["bricks"], draft).await
    }

    pub async fn update_brick(&self, id: &str, update: &BrickUpdate) -> Result<Brick, ClientError> {
        self.put_json(&["bricks", id], update).await
    }

    pub async fn delete_brick(&self, id: &str) -> Result<Message, ClientError> {
        self.delete(&["bricks", id]).await
    }

    // ---- templates ----

    pub async fn list_templates(&self) -> Result<Vec<Template>, ClientError> {
        self.get_json(&["templates"]).await
    }

    pub async fn get_template(&self, id: &str) -> Result<Template, ClientError> {
        self.get_json(&["templates", id]).await
    }

    pub async fn create_template(&self, draft: &NewTemplate) -> Result<Template, ClientError> {
        self.post_json(&["templates"], draft).await
    }

    pub async fn update_template(
        &self,
        id: &str,
        update: &TemplateUpdate,
    ) -> Result<Template, ClientError> {
        self.put_json(&["templates", id], update).await
    }

    /// Record one use of a template and return the new usage count.
    pub async fn use_template(&self, id: &str) -> Result<TemplateUse, ClientError> {
        let response = self
            .client
            .post(self.url(&["templates", id, "use"]))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn delete_template(&self, id: &str) -> Result<Message, ClientError> {
        self.delete(&["templates", id]).await
    }

    // ---- compositions ----

    pub async fn list_compositions(&self) -> Result<Vec<Composition>, ClientError> {
        self.get_json(&["compositions"]).await
    }

    pub async fn get_composition(&self, id: &str) -> Result<Composition, ClientError> {
        self.get_json(&["compositions", id]).await
    }

    pub async fn create_composition(
        &self,
        draft: &NewComposition,
    ) -> Result<Composition, ClientError> {
        self.post_json(&["compositions"], draft).await
    }

    pub async fn delete_composition(&self, id: &str) -> Result<Message, ClientError> {
        self.delete(&["compositions", id]).await
    }

    // ---- channels ----

    pub async fn list_channels(&self) -> Result<Vec<Channel>, ClientError> {
        self.get_json(&["channels"]).await
    }

    pub async fn create_channel(&self, draft: &NewChannel) -> Result<Channel, ClientError> {
        self.post_json(&["channels"], draft).await
    }

    pub async fn update_channel(
        &self,
        id: &str,
        update: &ChannelUpdate,
    ) -> Result<Channel, ClientError> {
        self.put_json(&["channels", id], update).await
    }

    pub async fn delete_channel(&self, id: &str) -> Result<Message, ClientError> {
        self.delete(&["channels", id]).await
    }

    pub async fn test_channel(&self, id: &str) -> Result<ConnectionTest, ClientError> {
        let response = self
            .client
            .post(self.url(&["channels", id, "test"]))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn publish(
        &self,
        channel_id: &str,
        composition_id: &str,
    ) -> Result<PublishReceipt, ClientError> {
        let body = PublishRequest {
            composition_id: composition_id.to_string(),
        };
        self.post_json(&["channels", channel_id, "publish"], &body)
            .await
    }

    /// Publish one composition to several channels concurrently.
    ///
    /// Every channel gets an outcome, in the order the ids were given. One
    /// channel failing does not stop the others.
    pub async fn publish_to_channels(
        &self,
        composition_id: &str,
        channel_ids: &[String],
    ) -> Vec<PublishOutcome> {
        let attempts = channel_ids.iter().map(|channel_id| async move {
            match self.publish(channel_id, composition_id).await {
                Ok(receipt) => PublishOutcome::published(channel_id.as_str(), receipt),
                Err(err) => {
                    tracing::warn!(channel_id = %channel_id, error = %err, "Publish failed");
                    PublishOutcome::failed(channel_id.as_str(), err.to_string())
                }
            }
        });
        join_all(attempts).await
    }

    // ---- ai ----

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, ClientError> {
        self.post_json(&["ai", "generate"], request).await
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<GeneratedContent, ClientError> {
        self.post_json(&["ai", "rewrite"], request).await
    }

    pub async fn save_as_brick(&self, request: &SaveAsBrickRequest) -> Result<Brick, ClientError> {
        self.post_json(&["ai", "save-as-brick"], request).await
    }

    // ---- private helpers ----

    /// Join path segments onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    async fn post_json<B, T>(&self, path: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn put_json<B, T>(&self, path: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn delete(&self, path: &[&str]) -> Result<Message, ClientError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code, capturing the body
    /// of a failure for the error.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
