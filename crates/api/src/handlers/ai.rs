//! Handlers for AI content generation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lego_core::generation::{GenerationRequest, RewriteRequest, SaveAsBrickRequest};
use lego_db::repositories::BrickRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /ai/generate
// ---------------------------------------------------------------------------

pub async fn generate_content(
    State(state): State<AppState>,
    Json(input): Json<GenerationRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let generated = state.generator()?.generate(&input).await?;
    Ok(Json(generated))
}

// ---------------------------------------------------------------------------
// POST /ai/rewrite
// ---------------------------------------------------------------------------

pub async fn rewrite_content(
    State(state): State<AppState>,
    Json(input): Json<RewriteRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let rewritten = state.generator()?.rewrite(&input).await?;
    Ok(Json(rewritten))
}

// ---------------------------------------------------------------------------
// POST /ai/save-as-brick
// ---------------------------------------------------------------------------

/// Save generated text into the brick library.
pub async fn save_as_brick(
    State(state): State<AppState>,
    Json(input): Json<SaveAsBrickRequest>,
) -> AppResult<impl IntoResponse> {
    if input.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content must not be empty".to_string()));
    }
    let content_type = input.content_type;
    let brick = BrickRepo::create(&state.pool, input.into_new_brick()).await?;

    tracing::info!(
        brick_id = %brick.id,
        content_type = content_type.as_str(),
        "Generated content saved as brick"
    );

    Ok((StatusCode::CREATED, Json(brick)))
}
