use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Backing store configuration.
///
/// Built once at startup and handed to [`crate::create_pool`] /
/// [`crate::SnippetStore::connect`]; nothing reads the environment after
/// that.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long an operation waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            database: "snipbin".into(),
            max_connections: 20,
            acquire_timeout_secs: 5,
        }
    }
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `5432`      |
    /// | `DB_USER`                 | `postgres`  |
    /// | `DB_PASS`                 | (empty)     |
    /// | `DB_NAME`                 | `snipbin`   |
    /// | `DB_MAX_CONNECTIONS`      | `20`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
    ///
    /// Panics on malformed numeric values so misconfiguration fails fast.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port: u16 = std::env::var("DB_PORT")
            .map(|v| v.parse().expect("DB_PORT must be a valid u16"))
            .unwrap_or(defaults.port);

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(defaults.max_connections);

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .map(|v| v.parse().expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.acquire_timeout_secs);

        Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            user: std::env::var("DB_USER").unwrap_or(defaults.user),
            password: std::env::var("DB_PASS").unwrap_or(defaults.password),
            database: std::env::var("DB_NAME").unwrap_or(defaults.database),
            max_connections,
            acquire_timeout_secs,
        }
    }

    /// Connection options targeting the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options().database(&self.database)
    }

    /// Connection options for the server's maintenance database, used to
    /// create the application database during bootstrap.
    pub fn server_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database("postgres")
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
