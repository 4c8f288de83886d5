//! Mounted at `/bricks` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::bricks;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_bricks
/// POST   /          -> create_brick
/// GET    /{id}      -> get_brick
/// PUT    /{id}      -> update_brick
/// DELETE /{id}      -> delete_brick
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bricks::list_bricks).post(bricks::create_brick))
        .route(
            "/{id}",
            get(bricks::get_brick)
                .put(bricks::update_brick)
                .delete(bricks::delete_brick),
        )
}
