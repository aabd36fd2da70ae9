//! Schema bootstrap CLI.
//!
//! ```text
//! snipbin-db init    # create database if missing, drop and recreate schema
//! snipbin-db check   # verify database, table and columns (default)
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snipbin_db::bootstrap::{self, SchemaStatus};
use snipbin_db::DbConfig;

#[derive(Parser, Debug)]
#[command(name = "snipbin-db", version, about = "snipbin database bootstrap")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Create the database if needed and recreate the schema (destroys data)
    Init,
    /// Check that the database and schema are ready (non-destructive)
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snipbin_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = DbConfig::from_env();

    match cli.cmd.unwrap_or(Cmd::Check) {
        Cmd::Init => {
            init(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Check => {
            if check(&config).await? {
                tracing::info!("Database is ready");
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::warn!("Database is not set up. Run `snipbin-db init` to initialize it.");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

async fn init(config: &DbConfig) -> anyhow::Result<()> {
    tracing::info!(database = %config.database, "Initializing database");

    if !bootstrap::ensure_database(config)
        .await
        .context("failed to create database")?
    {
        tracing::info!(database = %config.database, "Database already exists");
    }

    let pool = snipbin_db::create_pool(config)
        .await
        .context("failed to connect to database")?;

    bootstrap::init_schema(&pool)
        .await
        .context("failed to recreate schema")?;

    pool.close().await;
    Ok(())
}

async fn check(config: &DbConfig) -> anyhow::Result<bool> {
    if !bootstrap::database_exists(config)
        .await
        .context("failed to reach database server")?
    {
        tracing::warn!(database = %config.database, "Database does not exist");
        return Ok(false);
    }

    let pool = snipbin_db::create_pool(config)
        .await
        .context("failed to connect to database")?;

    let status = bootstrap::check_schema(&pool)
        .await
        .context("failed to inspect schema")?;
    pool.close().await;

    match status {
        SchemaStatus::Ready => {
            tracing::info!(table = bootstrap::SNIPPETS_TABLE, "Schema verified");
            Ok(true)
        }
        SchemaStatus::MissingTable => {
            tracing::warn!(table = bootstrap::SNIPPETS_TABLE, "Table does not exist");
            Ok(false)
        }
        SchemaStatus::MissingColumns(missing) => {
            tracing::warn!(
                table = bootstrap::SNIPPETS_TABLE,
                missing = ?missing,
                "Table is missing required columns",
            );
            Ok(false)
        }
    }
}
