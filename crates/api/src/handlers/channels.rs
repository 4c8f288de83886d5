//! Handlers for publishing channels.
//!
//! Connection tests and publishing are stubbed: no third-party platform is
//! contacted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lego_core::channel::{ChannelUpdate, NewChannel, PublishRequest};
use lego_core::error::CoreError;
use lego_core::types::now;
use lego_db::repositories::{ChannelRepo, CompositionRepo};

use super::DEFAULT_CREATOR;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

pub async fn list_channels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let channels = ChannelRepo::list(&state.pool).await?;
    Ok(Json(channels))
}

/// Create a custom channel. It starts disconnected.
pub async fn create_channel(
    State(state): State<AppState>,
    Json(input): Json<NewChannel>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let channel = ChannelRepo::create_custom(&state.pool, input, DEFAULT_CREATOR).await?;

    tracing::info!(channel_id = %channel.id, "Custom channel created");

    Ok((StatusCode::CREATED, Json(channel)))
}

pub async fn update_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ChannelUpdate>,
) -> AppResult<impl IntoResponse> {
    let channel = ChannelRepo::update(&state.pool, &id, input)
        .await?
        .ok_or_else(|| CoreError::not_found("Channel", &id))?;

    tracing::info!(
        channel_id = %channel.id,
        connected = channel.connected,
        status = channel.status.as_str(),
        "Channel updated"
    );

    Ok(Json(channel))
}

/// Delete a custom channel. System channels are rejected with 400.
pub async fn delete_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let channel = ChannelRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Channel", &id))?;
    channel.ensure_deletable()?;

    ChannelRepo::delete(&state.pool, &id).await?;

    tracing::info!(channel_id = %id, "Channel deleted");

    Ok(Json(MessageResponse::new("Channel deleted")))
}

pub async fn test_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let channel = ChannelRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Channel", &id))?;
    Ok(Json(channel.test_connection()))
}

/// Publish a saved composition to one channel.
pub async fn publish_to_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PublishRequest>,
) -> AppResult<impl IntoResponse> {
    let channel = ChannelRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Channel", &id))?;
    let composition = CompositionRepo::find_by_id(&state.pool, &input.composition_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Composition", &input.composition_id))?;

    let receipt = channel.publish(now())?;

    tracing::info!(
        channel_id = %channel.id,
        composition_id = %composition.id,
        publish_id = %receipt.publish_id,
        "Composition published"
    );

    Ok(Json(receipt))
}
