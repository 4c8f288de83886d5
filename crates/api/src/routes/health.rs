use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use lego_db::repositories::{BrickRepo, CompositionRepo, TemplateRepo};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    pub bricks_count: i64,
    pub templates_count: i64,
    pub compositions_count: i64,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET /health -- returns service and database health plus library sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let pool = &state.pool;
    let db_healthy = lego_db::health_check(pool).await.is_ok();

    // Counts fall back to zero on a degraded database.
    let bricks_count = BrickRepo::count(pool).await.unwrap_or(0);
    let templates_count = TemplateRepo::count(pool).await.unwrap_or(0);
    let compositions_count = CompositionRepo::count(pool).await.unwrap_or(0);

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        bricks_count,
        templates_count,
        compositions_count,
    })
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Content LEGO API",
        status: "running",
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
