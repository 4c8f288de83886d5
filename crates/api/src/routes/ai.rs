//! Mounted at `/ai` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(ai::generate_content))
        .route("/rewrite", post(ai::rewrite_content))
        .route("/save-as-brick", post(ai::save_as_brick))
}
