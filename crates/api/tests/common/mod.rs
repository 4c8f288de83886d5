#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lego_api::config::ServerConfig;
use lego_api::router::build_app_router;
use lego_api::state::AppState;
use lego_core::generation::{GeneratedContent, GenerationRequest, RewriteRequest};
use lego_core::types::now;
use lego_db::DbPool;
use lego_llm::{ContentGenerator, LlmError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
    }
}

/// Migrated in-memory database, optionally seeded.
pub async fn test_pool(seeded: bool) -> DbPool {
    let pool = lego_db::create_memory_pool().await.unwrap();
    lego_db::run_migrations(&pool).await.unwrap();
    if seeded {
        lego_db::seed::seed_if_empty(&pool).await.unwrap();
    }
    pool
}

/// Generator that echoes the request back instead of calling a model.
pub struct EchoGenerator;

#[async_trait]
impl ContentGenerator for EchoGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, LlmError> {
        Ok(GeneratedContent::new(
            format!("Generated: {}", request.topic),
            request.content_type,
            now(),
        ))
    }

    async fn rewrite(&self, request: &RewriteRequest) -> Result<GeneratedContent, LlmError> {
        Ok(GeneratedContent::new(
            format!("Rewritten: {}", request.content),
            request.content_type,
            now(),
        ))
    }
}

/// Generator whose provider always comes back empty.
pub struct EmptyGenerator;

#[async_trait]
impl ContentGenerator for EmptyGenerator {
    async fn generate(&self, _: &GenerationRequest) -> Result<GeneratedContent, LlmError> {
        Err(LlmError::EmptyResponse)
    }

    async fn rewrite(&self, _: &RewriteRequest) -> Result<GeneratedContent, LlmError> {
        Err(LlmError::EmptyResponse)
    }
}

/// Build the full application router (same middleware stack as production)
/// with no content generator.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_generator(pool, None)
}

pub fn build_test_app_with_generator(
    pool: DbPool,
    generator: Option<Arc<dyn ContentGenerator>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
