//! User storage.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use vfs_core::error::{ErrorKind, VfsError};
use vfs_core::result::VfsResult;
use vfs_entity::gateway::UserGateway;
use vfs_entity::user::User;

/// SQLite-backed user gateway.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGateway for UserRepository {
    async fn load_user(&self, username: &str) -> VfsResult<User> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to load user", e))?;

        user.ok_or_else(|| VfsError::not_exists(username))
    }

    async fn persist_new_user(&self, user: &User) -> VfsResult<()> {
        sqlx::query("INSERT INTO users (username, created_at) VALUES (?, ?)")
            .bind(&user.username)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to persist user", e))?;

        Ok(())
    }
}
