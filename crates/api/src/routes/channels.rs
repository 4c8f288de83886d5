//! Mounted at `/channels` by `api_routes()`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::channels;
use crate::state::AppState;

/// ```text
/// GET    /                -> list_channels
/// POST   /                -> create_channel
/// PUT    /{id}            -> update_channel
/// DELETE /{id}            -> delete_channel
/// POST   /{id}/test       -> test_channel
/// POST   /{id}/publish    -> publish_to_channel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(channels::list_channels).post(channels::create_channel),
        )
        .route(
            "/{id}",
            put(channels::update_channel).delete(channels::delete_channel),
        )
        .route("/{id}/test", post(channels::test_channel))
        .route("/{id}/publish", post(channels::publish_to_channel))
}
