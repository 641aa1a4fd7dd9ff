//! User service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use vfs_core::error::ErrorKind;
use vfs_core::traits::IdGenerator;
use vfs_core::{VfsError, VfsResult};
use vfs_entity::filesystem::FileSystem;
use vfs_entity::gateway::{FileSystemGateway, UserGateway};
use vfs_entity::user::User;

/// Registers users and provisions their file systems.
pub struct UserService {
    users: Arc<dyn UserGateway>,
    filesystems: Arc<dyn FileSystemGateway>,
    ids: Arc<dyn IdGenerator>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(
        users: Arc<dyn UserGateway>,
        filesystems: Arc<dyn FileSystemGateway>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            users,
            filesystems,
            ids,
        }
    }

    /// Register a user and provision an empty file system rooted at `/`.
    pub async fn register(&self, username: &str, now: DateTime<Utc>) -> VfsResult<User> {
        let user = User::new(username, now)?;

        match self.users.load_user(username).await {
            Ok(_) => return Err(VfsError::already_exists(username)),
            Err(err) if err.kind == ErrorKind::NotExists => {}
            Err(err) => return Err(err),
        }

        self.users.persist_new_user(&user).await?;

        let filesystem = FileSystem::provision(username, now, self.ids.as_ref());
        self.filesystems.persist_new_filesystem(&filesystem).await?;

        info!(username = %username, "User registered");
        Ok(user)
    }
}
