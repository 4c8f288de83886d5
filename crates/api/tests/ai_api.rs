//! Integration tests for the AI endpoints with a stubbed generator.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, EchoGenerator, EmptyGenerator};
use serde_json::json;

fn generate_body() -> serde_json::Value {
    json!({
        "contentType": "social",
        "topic": "autumn menu",
        "tone": "friendly",
        "length": "short",
        "language": "en"
    })
}

#[tokio::test]
async fn generate_returns_scored_content() {
    let app = common::build_test_app_with_generator(
        common::test_pool(false).await,
        Some(Arc::new(EchoGenerator)),
    );
    let response = post_json(app, "/ai/generate", generate_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"], "Generated: autumn menu");
    assert_eq!(json["type"], "social");
    let score = json["score"].as_u64().unwrap();
    assert!((70..=99).contains(&score));
}

#[tokio::test]
async fn rewrite_defaults_to_article() {
    let app = common::build_test_app_with_generator(
        common::test_pool(false).await,
        Some(Arc::new(EchoGenerator)),
    );
    let json = body_json(post_json(app, "/ai/rewrite", json!({ "content": "Old copy" })).await).await;
    assert_eq!(json["content"], "Rewritten: Old copy");
    assert_eq!(json["type"], "article");
}

#[tokio::test]
async fn blank_topic_is_rejected() {
    let app = common::build_test_app_with_generator(
        common::test_pool(false).await,
        Some(Arc::new(EchoGenerator)),
    );
    let mut body = generate_body();
    body["topic"] = json!("");
    let response = post_json(app, "/ai/generate", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_generator_returns_503() {
    let app = common::build_test_app(common::test_pool(false).await);
    let response = post_json(app, "/ai/generate", generate_body()).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn empty_model_response_returns_502() {
    let app = common::build_test_app_with_generator(
        common::test_pool(false).await,
        Some(Arc::new(EmptyGenerator)),
    );
    let response = post_json(app, "/ai/generate", generate_body()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn save_ad_as_cta_brick() {
    let app = common::build_test_app(common::test_pool(false).await);
    let response = post_json(
        app,
        "/ai/save-as-brick",
        json!({ "content": "Two for one", "contentType": "ad", "tags": ["promo"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let brick = body_json(response).await;
    assert_eq!(brick["type"], "cta");
    assert_eq!(brick["title"], "AI generated ad");
    assert_eq!(brick["tags"], json!(["promo", "ai-generated", "ad"]));
    assert_eq!(brick["metadata"]["description"], "Generated ad content");
}
