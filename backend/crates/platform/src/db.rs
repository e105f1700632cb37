//! Persistence Gateway
//!
//! Owns the process-wide PostgreSQL connection pool. The first caller
//! establishes the pool; every later caller gets the cached handle. The
//! pool lives behind an init-once primitive, so two concurrent first calls
//! cannot both connect: one initializer runs, the other waits for it.
//!
//! All other components borrow the pool per call; this module is the only
//! owner.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Fixed connect/acquire timeout handed to the driver.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed pool size. No pooling policy beyond this.
pub const MAX_CONNECTIONS: u32 = 5;

/// Environment variable holding the connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Gateway errors. `MissingDatabaseUrl` is fatal at process start.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{DATABASE_URL_VAR} must be set in environment")]
    MissingDatabaseUrl,

    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Get or create the shared connection pool.
///
/// Idempotent across repeated calls within one process lifetime. A failed
/// initialization is not cached; the next caller retries.
pub async fn pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(connect).await
}

async fn connect() -> Result<PgPool, DbError> {
    let url = std::env::var(DATABASE_URL_VAR).map_err(|_| DbError::MissingDatabaseUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect(&url)
        .await?;

    tracing::info!("Connected to database");

    Ok(pool)
}
