//! Database schema migrations.

use sqlx::sqlite::SqlitePool;
use tracing::info;

use vfs_core::error::{ErrorKind, VfsError};
use vfs_core::result::VfsResult;

/// Apply all pending migrations from the `migrations/` directory.
pub async fn run_migrations(pool: &SqlitePool) -> VfsResult<()> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to run migrations", e))?;

    info!("Database migrations complete");
    Ok(())
}
