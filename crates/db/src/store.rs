//! The snippet store: slug allocation plus create/get/list/delete.
//!
//! Every operation checks out one pooled connection for its own duration.
//! The connection goes back to the pool when the `PoolConnection` guard
//! drops, which happens on every return path including `?` propagation.

use std::sync::Arc;

use snipbin_core::slug::{RandomSlugGenerator, SlugGenerator, MAX_SLUG_ATTEMPTS};
use snipbin_core::validation::{validate_content, validate_limit};

use crate::config::DbConfig;
use crate::error::StoreError;
use crate::models::snippet::{Snippet, SnippetPreview};
use crate::repositories::SnippetRepo;
use crate::DbPool;

/// Slug-keyed snippet store backed by PostgreSQL.
///
/// Holds no mutable state of its own; the database is the only
/// synchronization point, so the store is cheap to clone and share across
/// request handlers.
pub struct SnippetStore<G = RandomSlugGenerator> {
    pool: DbPool,
    generator: Arc<G>,
}

impl<G> Clone for SnippetStore<G> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl SnippetStore<RandomSlugGenerator> {
    /// Build a store over an existing pool with the random slug generator.
    pub fn new(pool: DbPool) -> Self {
        Self::with_generator(pool, RandomSlugGenerator)
    }

    /// Open a pool from `config` and build a store over it.
    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let pool = crate::create_pool(config).await?;
        Ok(Self::new(pool))
    }
}

impl<G: SlugGenerator> SnippetStore<G> {
    /// Build a store that draws candidate slugs from `generator`.
    pub fn with_generator(pool: DbPool, generator: G) -> Self {
        Self {
            pool,
            generator: Arc::new(generator),
        }
    }

    /// The underlying pool, for health checks and migrations.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Store `content` under a freshly allocated slug and return the slug.
    ///
    /// Up to [`MAX_SLUG_ATTEMPTS`] candidates are tried. A candidate is
    /// skipped if it is already in use, or if a concurrent writer claims it
    /// between the check and the insert.
    pub async fn create(&self, content: &str) -> Result<String, StoreError> {
        validate_content(content)?;

        let mut conn = self.pool.acquire().await?;

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self.generator.generate();

            if SnippetRepo::slug_exists(&mut *conn, &slug).await? {
                tracing::warn!(%slug, attempt, "Slug collision, regenerating");
                continue;
            }

            match SnippetRepo::insert(&mut *conn, &slug, content).await? {
                Some(snippet) => {
                    tracing::info!(
                        snippet_id = snippet.id,
                        slug = %snippet.slug,
                        attempt,
                        "Snippet created",
                    );
                    return Ok(snippet.slug);
                }
                None => {
                    tracing::warn!(%slug, attempt, "Slug claimed by concurrent insert, regenerating");
                }
            }
        }

        tracing::error!(attempts = MAX_SLUG_ATTEMPTS, "Slug allocation exhausted");
        Err(StoreError::AllocationExhausted {
            attempts: MAX_SLUG_ATTEMPTS,
        })
    }

    /// Fetch the full record for `slug`, or `None` if there is none.
    pub async fn get(&self, slug: &str) -> Result<Option<Snippet>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let snippet = SnippetRepo::find_by_slug(&mut *conn, slug).await?;

        if snippet.is_none() {
            tracing::debug!(%slug, "Snippet not found");
        }
        Ok(snippet)
    }

    /// The `limit` most recent snippets, newest first, as previews.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<SnippetPreview>, StoreError> {
        validate_limit(limit)?;

        let mut conn = self.pool.acquire().await?;
        Ok(SnippetRepo::list_recent(&mut *conn, limit).await?)
    }

    /// Delete the snippet under `slug`. Returns `false` if none existed.
    pub async fn delete(&self, slug: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let deleted = SnippetRepo::delete_by_slug(&mut *conn, slug).await?;

        if deleted {
            tracing::info!(%slug, "Snippet deleted");
        } else {
            tracing::debug!(%slug, "Delete of absent snippet");
        }
        Ok(deleted)
    }
}
