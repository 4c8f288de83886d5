//! Handlers for content templates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use lego_core::error::CoreError;
use lego_core::template::{NewTemplate, TemplateUpdate};
use lego_db::repositories::TemplateRepo;

use super::DEFAULT_CREATOR;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response body of `POST /templates/{id}/use`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUseResponse {
    pub message: String,
    pub usage_count: i64,
}

pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Template", &id))?;
    Ok(Json(template))
}

pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<NewTemplate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let template = TemplateRepo::create(&state.pool, input, DEFAULT_CREATOR).await?;

    tracing::info!(
        template_id = %template.id,
        bricks = template.bricks.len(),
        "Template created"
    );

    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TemplateUpdate>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::update(&state.pool, &id, input)
        .await?
        .ok_or_else(|| CoreError::not_found("Template", &id))?;

    tracing::info!(template_id = %template.id, "Template updated");

    Ok(Json(template))
}

/// Record one use of a template.
pub async fn use_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let usage_count = TemplateRepo::record_use(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Template", &id))?;

    Ok(Json(TemplateUseResponse {
        message: "Template usage recorded".to_string(),
        usage_count,
    }))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !TemplateRepo::delete(&state.pool, &id).await? {
        return Err(CoreError::not_found("Template", &id).into());
    }

    tracing::info!(template_id = %id, "Template deleted");

    Ok(Json(MessageResponse::new("Template deleted")))
}
