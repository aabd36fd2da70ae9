//! Snippet model.

use serde::Serialize;
use sqlx::FromRow;
use snipbin_core::types::{DbId, Timestamp};

/// A full row from the `snippets` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Snippet {
    pub id: DbId,
    pub slug: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Listing row: content is cut down to a fixed-length preview.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SnippetPreview {
    pub id: DbId,
    pub slug: String,
    pub preview: String,
    pub created_at: Timestamp,
}
