//! Handlers for the brick library.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lego_core::brick::{BrickUpdate, NewBrick};
use lego_core::error::CoreError;
use lego_core::library::{filter_bricks, parse_type_filter};
use lego_db::repositories::BrickRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for `GET /bricks`.
#[derive(Debug, Default, Deserialize)]
pub struct BrickListParams {
    #[serde(rename = "type")]
    pub brick_type: Option<String>,
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /bricks
// ---------------------------------------------------------------------------

pub async fn list_bricks(
    State(state): State<AppState>,
    Query(params): Query<BrickListParams>,
) -> AppResult<impl IntoResponse> {
    let brick_type = parse_type_filter(params.brick_type.as_deref())?;
    let bricks = BrickRepo::list(&state.pool).await?;
    Ok(Json(filter_bricks(
        bricks,
        brick_type,
        params.search.as_deref(),
    )))
}

// ---------------------------------------------------------------------------
// GET /bricks/{id}
// ---------------------------------------------------------------------------

pub async fn get_brick(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let brick = BrickRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Brick", &id))?;
    Ok(Json(brick))
}

// ---------------------------------------------------------------------------
// POST /bricks
// ---------------------------------------------------------------------------

pub async fn create_brick(
    State(state): State<AppState>,
    Json(input): Json<NewBrick>,
) -> AppResult<impl IntoResponse> {
    let brick = BrickRepo::create(&state.pool, input).await?;

    tracing::info!(brick_id = %brick.id, brick_type = %brick.brick_type(), "Brick created");

    Ok((StatusCode::CREATED, Json(brick)))
}

// ---------------------------------------------------------------------------
// PUT /bricks/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update; every successful update bumps the version.
pub async fn update_brick(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BrickUpdate>,
) -> AppResult<impl IntoResponse> {
    let brick = BrickRepo::update(&state.pool, &id, input)
        .await?
        .ok_or_else(|| CoreError::not_found("Brick", &id))?;

    tracing::info!(brick_id = %brick.id, version = brick.version, "Brick updated");

    Ok(Json(brick))
}

// ---------------------------------------------------------------------------
// DELETE /bricks/{id}
// ---------------------------------------------------------------------------

pub async fn delete_brick(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !BrickRepo::delete(&state.pool, &id).await? {
        return Err(CoreError::not_found("Brick", &id).into());
    }

    tracing::info!(brick_id = %id, "Brick deleted");

    Ok(Json(MessageResponse::new("Brick deleted")))
}
