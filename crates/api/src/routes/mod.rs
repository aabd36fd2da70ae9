pub mod health;
pub mod snippets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /snippets                 list, create
/// /snippets/{slug}          get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/snippets", snippets::router())
}
