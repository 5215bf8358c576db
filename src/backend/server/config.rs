/**
 * Server Configuration
 *
 * This module loads server settings from the environment and opens the
 * SQLite pool.
 *
 * # Configuration Sources
 *
 * Environment variables, after `.env` has been loaded by the binary:
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite://noteboard.db`
 * - `SERVER_PORT` - listen port, default 3000
 * - `CORS_ORIGIN` - allowed browser origin; any origin when unset
 * - `BCRYPT_COST` - bcrypt work factor, default `bcrypt::DEFAULT_COST`
 * - `JWT_SECRET` - read by `TokenService::from_env`
 *
 * # Error Handling
 *
 * Unparseable values fall back to their defaults with a warning. A database
 * that cannot be opened or migrated stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::BackendError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://noteboard.db";
pub const DEFAULT_PORT: u16 = 3000;

/// Accepted bcrypt work factors
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            cors_origin: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::info!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            defaults.database_url.clone()
        });

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("Invalid SERVER_PORT {:?}: {}, using {}", raw, e, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let cors_origin = lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty());

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) => cost,
                _ => {
                    tracing::warn!("Invalid BCRYPT_COST {:?}, using {}", raw, defaults.bcrypt_cost);
                    defaults.bcrypt_cost
                }
            },
            None => defaults.bcrypt_cost,
        };

        Self {
            database_url,
            port,
            cors_origin,
            bcrypt_cost,
        }
    }
}

/// Open the SQLite pool and run migrations
///
/// The database file is created when missing and foreign keys are enforced
/// on every connection.
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            tracing::error!("Invalid DATABASE_URL {:?}: {:?}", database_url, e);
            BackendError::Database(e)
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            BackendError::Database(e)
        })?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Fresh in-memory database with the schema applied
///
/// One connection that is never recycled, so the database lives as long as
/// the pool does. Used by tests.
pub async fn memory_pool() -> Result<SqlitePool, BackendError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), BackendError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        BackendError::Migration(e)
    })?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
