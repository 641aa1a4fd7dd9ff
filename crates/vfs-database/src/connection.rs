//! SQLite connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use vfs_core::config::DatabaseConfig;
use vfs_core::error::{ErrorKind, VfsError};
use vfs_core::result::VfsResult;

/// Wrapper around the SQLite connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open the database file from configuration, creating it when it
    /// does not exist yet.
    pub async fn connect(config: &DatabaseConfig) -> VfsResult<Self> {
        info!(
            path = %config.path,
            max_connections = config.max_connections,
            "Opening SQLite database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to open database", e)
            })?;

        Ok(Self { pool })
    }

    /// Open an in-memory database on a single persistent connection, so
    /// the schema survives for the pool's lifetime.
    pub async fn connect_in_memory() -> VfsResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to parse database URL", e)
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to open in-memory database", e)
            })?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Consume the wrapper and return the underlying pool.
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> VfsResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Database health check failed", e)
            })?;
        Ok(())
    }

    /// Close all connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
