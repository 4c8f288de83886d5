pub mod ai;
pub mod bricks;
pub mod channels;
pub mod compositions;
pub mod health;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /bricks                             list (?type, ?search), create
/// /bricks/{id}                        get, update, delete
///
/// /templates                          list, create
/// /templates/{id}                     get, update, delete
/// /templates/{id}/use                 record a use (POST)
///
/// /compositions                       list, create
/// /compositions/{id}                  get, delete
///
/// /channels                           list, create custom
/// /channels/{id}                      update, delete (custom only)
/// /channels/{id}/test                 connection test (POST)
/// /channels/{id}/publish              publish a composition (POST)
///
/// /ai/generate                        generate content (POST)
/// /ai/rewrite                         rewrite content (POST)
/// /ai/save-as-brick                   save generated content (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bricks", bricks::router())
        .nest("/templates", templates::router())
        .nest("/compositions", compositions::router())
        .nest("/channels", channels::router())
        .nest("/ai", ai::router())
}
