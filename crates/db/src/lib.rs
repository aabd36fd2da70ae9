//! Persistence layer for snipbin.
//!
//! Owns the connection pool, migrations, the `snippets` repository and the
//! [`SnippetStore`] that the HTTP service calls into.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use config::DbConfig;
pub use error::StoreError;
pub use store::SnippetStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from explicit configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
