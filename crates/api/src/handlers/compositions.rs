//! Handlers for saved compositions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lego_core::composition::NewComposition;
use lego_core::error::CoreError;
use lego_db::repositories::CompositionRepo;

use super::DEFAULT_CREATOR;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

pub async fn list_compositions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let compositions = CompositionRepo::list(&state.pool).await?;
    Ok(Json(compositions))
}

pub async fn get_composition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let composition = CompositionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Composition", &id))?;
    Ok(Json(composition))
}

/// Save a composition. The name must be non-blank.
pub async fn create_composition(
    State(state): State<AppState>,
    Json(input): Json<NewComposition>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let composition = CompositionRepo::create(&state.pool, input, DEFAULT_CREATOR).await?;

    tracing::info!(
        composition_id = %composition.id,
        bricks = composition.bricks.len(),
        "Composition saved"
    );

    Ok((StatusCode::CREATED, Json(composition)))
}

pub async fn delete_composition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !CompositionRepo::delete(&state.pool, &id).await? {
        return Err(CoreError::not_found("Composition", &id).into());
    }

    tracing::info!(composition_id = %id, "Composition deleted");

    Ok(Json(MessageResponse::new("Composition deleted")))
}
