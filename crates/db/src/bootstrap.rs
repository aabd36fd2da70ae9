//! Schema bootstrap: destructive `init` and non-destructive `check`.
//!
//! The server itself only ever calls [`crate::run_migrations`]. These
//! helpers back the `snipbin-db` CLI.

use sqlx::{Connection, PgConnection};

use crate::config::DbConfig;
use crate::DbPool;

/// Table holding snippets.
pub const SNIPPETS_TABLE: &str = "snippets";

/// Columns the store cannot work without.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "slug", "content", "created_at"];

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Outcome of [`check_schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    Ready,
    MissingTable,
    MissingColumns(Vec<String>),
}

impl SchemaStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, SchemaStatus::Ready)
    }
}

/// Whether the configured database exists on the server.
pub async fn database_exists(config: &DbConfig) -> Result<bool, sqlx::Error> {
    let mut conn = PgConnection::connect_with(&config.server_options()).await?;
    let exists = query_database_exists(&mut conn, &config.database).await;
    conn.close().await?;
    exists
}

/// Create the configured database if it does not exist yet.
///
/// Returns `true` if the database was created by this call.
pub async fn ensure_database(config: &DbConfig) -> Result<bool, sqlx::Error> {
    let mut conn = PgConnection::connect_with(&config.server_options()).await?;

    let created = create_database_if_missing(&mut conn, &config.database).await;
    conn.close().await?;
    created
}

async fn create_database_if_missing(
    conn: &mut PgConnection,
    name: &str,
) -> Result<bool, sqlx::Error> {
    if query_database_exists(&mut *conn, name).await? {
        return Ok(false);
    }
    let statement = format!("CREATE DATABASE {}", quote_ident(name));
    sqlx::query(&statement).execute(conn).await?;
    tracing::info!(database = name, "Database created");
    Ok(true)
}

async fn query_database_exists(conn: &mut PgConnection, name: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(name)
        .fetch_one(conn)
        .await
}

/// Drop the snippets table and the migration ledger, then re-apply all
/// migrations. Destroys every stored snippet.
pub async fn init_schema(pool: &DbPool) -> Result<(), BootstrapError> {
    let mut tx = pool.begin().await?;
    sqlx::query(&format!("DROP TABLE IF EXISTS {SNIPPETS_TABLE}"))
        .execute(&mut *tx)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    crate::run_migrations(pool).await?;
    tracing::info!(table = SNIPPETS_TABLE, "Schema recreated");
    Ok(())
}

/// Verify the snippets table and its required columns without modifying
/// anything.
pub async fn check_schema(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let columns: Vec<String> = sqlx::query_scalar(
        "SELECT column_name::text
         FROM information_schema.columns
         WHERE table_schema = current_schema() AND table_name = $1",
    )
    .bind(SNIPPETS_TABLE)
    .fetch_all(pool)
    .await?;

    Ok(schema_status(&columns))
}

fn schema_status(columns: &[String]) -> SchemaStatus {
    if columns.is_empty() {
        return SchemaStatus::MissingTable;
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        SchemaStatus::Ready
    } else {
        SchemaStatus::MissingColumns(missing)
    }
}

/// Quote a Postgres identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
