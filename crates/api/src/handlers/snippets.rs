//! Handlers for snippets.
//!
//! Thin translation between HTTP and [`snipbin_db::SnippetStore`]: every
//! handler makes at most one store call.

use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use snipbin_core::error::CoreError;
use snipbin_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use snipbin_core::slug::fits_slug_column;
use snipbin_core::types::Timestamp;
use snipbin_db::models::snippet::Snippet;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a snippet, as JSON or as a urlencoded form.
#[derive(Debug, Deserialize)]
pub struct CreateSnippetRequest {
    #[serde(default)]
    pub content: String,
}

/// Response body for a created snippet.
#[derive(Debug, Serialize)]
pub struct CreatedSnippet {
    pub slug: String,
    pub url: String,
}

/// JSON rendering of a snippet on its shareable link.
#[derive(Debug, Serialize)]
pub struct SnippetView {
    pub slug: String,
    pub content: String,
    pub created_at: Timestamp,
}

fn not_found(slug: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Snippet",
        key: slug,
    })
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Look up a snippet. Keys that cannot fit the slug column are absent
/// without a query.
async fn find_snippet(state: &AppState, slug: String) -> AppResult<Snippet> {
    if !fits_slug_column(&slug) {
        return Err(not_found(slug));
    }
    state.store.get(&slug).await?.ok_or_else(|| not_found(slug))
}

/// POST /api/v1/snippets
///
/// Store new content under a fresh slug. JSON bodies get `201` with the
/// slug and link; form posts are redirected to the shareable link.
pub async fn create_snippet(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Response> {
    if is_form(request.headers()) {
        let Form(input) = Form::<CreateSnippetRequest>::from_request(request, &state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let slug = state.store.create(&input.content).await?;

        return Ok(Redirect::to(&state.config.snippet_url(&slug)).into_response());
    }

    let Json(input) = Json::<CreateSnippetRequest>::from_request(request, &state)
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let slug = state.store.create(&input.content).await?;
    let url = state.config.snippet_url(&slug);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedSnippet { slug, url },
        }),
    )
        .into_response())
}

/// GET /api/v1/snippets
///
/// Most recent snippets, newest first, with content previews.
pub async fn list_snippets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let snippets = state.store.list_recent(limit).await?;

    Ok(Json(DataResponse { data: snippets }))
}

/// GET /api/v1/snippets/{slug}
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let snippet = find_snippet(&state, slug).await?;

    Ok(Json(DataResponse { data: snippet }))
}

/// GET /p/{slug}
///
/// `{slug, content, created_at}` when the client accepts JSON, otherwise
/// the raw content as plain text.
pub async fn view_snippet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let snippet = find_snippet(&state, slug).await?;

    if wants_json(&headers) {
        return Ok(Json(SnippetView {
            slug: snippet.slug,
            content: snippet.content,
            created_at: snippet.created_at,
        })
        .into_response());
    }

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        snippet.content,
    )
        .into_response())
}

/// DELETE /api/v1/snippets/{slug}, DELETE /p/{slug}
pub async fn delete_snippet(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !fits_slug_column(&slug) || !state.store.delete(&slug).await? {
        return Err(not_found(slug));
    }

    Ok(StatusCode::NO_CONTENT)
}
