//! Integration tests for saving compositions and publishing them to channels.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::{json, Value};

async fn library(app: &axum::Router) -> Value {
    body_json(get(app.clone(), "/bricks").await).await
}

async fn save_composition(app: &axum::Router) -> String {
    let bricks = library(app).await;
    let response = post_json(
        app.clone(),
        "/compositions",
        json!({ "name": "Welcome post", "bricks": bricks, "tags": ["welcome"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn composition_defaults_and_round_trip() {
    let app = common::build_test_app(common::test_pool(true).await);
    let id = save_composition(&app).await;

    let fetched = body_json(get(app.clone(), &format!("/compositions/{id}")).await).await;
    assert_eq!(fetched["category"], "default");
    assert_eq!(fetched["tags"], json!(["welcome"]));
    assert_eq!(fetched["bricks"], library(&app).await);

    let list = body_json(get(app, "/compositions").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = common::build_test_app(common::test_pool(true).await);
    let response = post_json(app, "/compositions", json!({ "name": "  ", "bricks": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn delete_composition() {
    let app = common::build_test_app(common::test_pool(true).await);
    let id = save_composition(&app).await;

    assert_eq!(delete(app.clone(), &format!("/compositions/{id}")).await.status(), StatusCode::OK);
    assert_eq!(
        delete(app, &format!("/compositions/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn publish_to_connected_channel() {
    let app = common::build_test_app(common::test_pool(true).await);
    let id = save_composition(&app).await;

    let response = post_json(
        app,
        "/channels/wechat/publish",
        json!({ "compositionId": id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let receipt = body_json(response).await;
    assert_eq!(receipt["success"], true);
    assert!(receipt["publishId"].as_str().unwrap().starts_with("pub-"));
    assert!(receipt["publishedAt"].is_string());
}

#[tokio::test]
async fn publish_failures() {
    let app = common::build_test_app(common::test_pool(true).await);
    let id = save_composition(&app).await;

    // Disconnected channel.
    let response = post_json(app.clone(), "/channels/weibo/publish", json!({ "compositionId": id })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown channel.
    let response = post_json(app.clone(), "/channels/myspace/publish", json!({ "compositionId": id })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unknown composition.
    let response = post_json(app, "/channels/wechat/publish", json!({ "compositionId": "missing" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
