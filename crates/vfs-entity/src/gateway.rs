//! Persistence gateway traits.
//!
//! Services mutate the in-memory tree first, then call a narrow persist
//! method describing what changed. Implementations only store and load;
//! they never apply namespace rules. Two implementations are provided
//! by `vfs-database`: SQLite-backed repositories and an in-memory
//! gateway for tests.

use async_trait::async_trait;
use uuid::Uuid;

use vfs_core::VfsResult;

use crate::file::File;
use crate::filesystem::FileSystem;
use crate::folder::Folder;
use crate::user::User;

/// Storage for user accounts.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Load a user by username, failing with a not-exists error when
    /// the user is unknown.
    async fn load_user(&self, username: &str) -> VfsResult<User>;

    /// Store a newly registered user.
    async fn persist_new_user(&self, user: &User) -> VfsResult<()>;
}

/// Storage for file systems and everything inside them.
#[async_trait]
pub trait FileSystemGateway: Send + Sync {
    /// Load a user's full tree, failing with a not-exists error when
    /// the user has no file system.
    async fn load_tree(&self, username: &str) -> VfsResult<FileSystem>;

    /// Store a freshly provisioned file system with its root folder.
    async fn persist_new_filesystem(&self, filesystem: &FileSystem) -> VfsResult<()>;

    /// Store a newly created folder.
    async fn persist_new_folder(&self, folder: &Folder) -> VfsResult<()>;

    /// Remove a folder and the files it held.
    async fn persist_deleted_folder(&self, folder_id: Uuid) -> VfsResult<()>;

    /// Store a folder's new name, including the denormalized folder
    /// name on its files.
    async fn persist_renamed_folder(&self, folder: &Folder) -> VfsResult<()>;

    /// Store a newly created file.
    async fn persist_new_file(&self, file: &File) -> VfsResult<()>;

    /// Remove a file.
    async fn persist_deleted_file(&self, file_id: Uuid) -> VfsResult<()>;
}
