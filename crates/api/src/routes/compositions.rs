//! Mounted at `/compositions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::compositions;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_compositions
/// POST   /          -> create_composition
/// GET    /{id}      -> get_composition
/// DELETE /{id}      -> delete_composition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(compositions::list_compositions).post(compositions::create_composition),
        )
        .route(
            "/{id}",
            get(compositions::get_composition).delete(compositions::delete_composition),
        )
}
