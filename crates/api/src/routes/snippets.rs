//! Route definitions for snippets.

use axum::routing::get;
use axum::Router;

use crate::handlers::snippets;
use crate::state::AppState;

/// Snippet API routes mounted at `/api/v1/snippets`.
///
/// ```text
/// GET    /                  -> list_snippets
/// POST   /                  -> create_snippet
/// GET    /{slug}            -> get_snippet
/// DELETE /{slug}            -> delete_snippet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(snippets::list_snippets).post(snippets::create_snippet),
        )
        .route(
            "/{slug}",
            get(snippets::get_snippet).delete(snippets::delete_snippet),
        )
}

/// Shareable link routes, mounted at the root.
///
/// ```text
/// GET    /p/{slug}          -> view_snippet (text, or JSON by Accept)
/// DELETE /p/{slug}          -> delete_snippet
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route(
        "/p/{slug}",
        get(snippets::view_snippet).delete(snippets::delete_snippet),
    )
}
