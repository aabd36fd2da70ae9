//! Repository for the `snippets` table.

use sqlx::PgExecutor;
use snipbin_core::pagination::PREVIEW_LENGTH;

use crate::models::snippet::{Snippet, SnippetPreview};

/// Column list for full snippet queries.
const COLUMNS: &str = "id, slug, content, created_at, updated_at";

/// Provides SQL operations for snippets.
///
/// No validation or retry logic lives here; see [`crate::SnippetStore`].
pub struct SnippetRepo;

impl SnippetRepo {
    /// Whether a row already uses `slug`.
    pub async fn slug_exists<'e, E>(executor: E, slug: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM snippets WHERE slug = $1)")
            .bind(slug)
            .fetch_one(executor)
            .await
    }

    /// Insert a new snippet under `slug`.
    ///
    /// Returns `None` when the slug is already taken. The unique constraint
    /// is checked atomically with the insert, so an existing row is never
    /// overwritten.
    pub async fn insert<'e, E>(
        executor: E,
        slug: &str,
        content: &str,
    ) -> Result<Option<Snippet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO snippets (slug, content)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_snippets_slug DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(slug)
            .bind(content)
            .fetch_optional(executor)
            .await
    }

    /// Find a snippet by exact, case-sensitive slug.
    pub async fn find_by_slug<'e, E>(executor: E, slug: &str) -> Result<Option<Snippet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM snippets WHERE slug = $1");
        sqlx::query_as::<_, Snippet>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// List the most recent snippets, newest first, with content previews.
    ///
    /// `LEFT()` counts characters, so previews never split a multi-byte
    /// sequence. Ties on `created_at` fall back to `id`.
    pub async fn list_recent<'e, E>(
        executor: E,
        limit: i64,
    ) -> Result<Vec<SnippetPreview>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, SnippetPreview>(
            "SELECT id, slug, LEFT(content, $1) AS preview, created_at
             FROM snippets
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(PREVIEW_LENGTH)
        .bind(limit)
        .fetch_all(executor)
        .await
    }

    /// Delete a snippet by slug. Returns `true` if a row was deleted.
    pub async fn delete_by_slug<'e, E>(executor: E, slug: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM snippets WHERE slug = $1")
            .bind(slug)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
