//! File system storage.
//!
//! The tree is stored across three tables and reassembled on load.
//! Folder and file rows are read in id order; ids are UUIDv7, so this
//! reproduces insertion order.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use vfs_core::error::{ErrorKind, VfsError};
use vfs_core::result::VfsResult;
use vfs_entity::file::File;
use vfs_entity::filesystem::FileSystem;
use vfs_entity::folder::Folder;
use vfs_entity::gateway::FileSystemGateway;

/// SQLite-backed file system gateway.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct FileSystemRow {
    id: Uuid,
    username: String,
}

impl FileSystemRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileSystemGateway for FileSystemRepository {
    async fn load_tree(&self, username: &str) -> VfsResult<FileSystem> {
        let row = sqlx::query_as::<_, FileSystemRow>(
            "SELECT id, username FROM file_systems WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to load file system", e))?
        .ok_or_else(|| VfsError::not_exists(username))?;

        let mut root = sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE fs_id = ? AND parent_id IS NULL",
        )
        .bind(row.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to load root folder", e))?
        .ok_or_else(|| {
            VfsError::internal(format!("File system for {username} has no root folder"))
        })?;

        root.folders = sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE fs_id = ? AND parent_id IS NOT NULL ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to load folders", e))?;

        let files = sqlx::query_as::<_, File>("SELECT * FROM files WHERE fs_id = ? ORDER BY id")
            .bind(row.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to load files", e))?;

        for file in files {
            if file.folder_id == root.id {
                root.files.push(file);
            } else if let Some(folder) = root
                .folders
                .iter_mut()
                .find(|folder| folder.id == file.folder_id)
            {
                folder.files.push(file);
            }
        }

        debug!(
            username = %username,
            folders = root.folders.len(),
            "Loaded file system tree"
        );

        Ok(FileSystem {
            id: row.id,
            username: row.username,
            root,
        })
    }

    async fn persist_new_filesystem(&self, filesystem: &FileSystem) -> VfsResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("INSERT INTO file_systems (id, username) VALUES (?, ?)")
            .bind(filesystem.id)
            .bind(&filesystem.username)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to persist file system", e)
            })?;

        let root = &filesystem.root;
        sqlx::query(
            "INSERT INTO folders (id, fs_id, parent_id, name, description, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(root.id)
        .bind(root.fs_id)
        .bind(root.parent_id)
        .bind(&root.name)
        .bind(&root.description)
        .bind(root.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to persist root folder", e)
        })?;

        tx.commit().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    async fn persist_new_folder(&self, folder: &Folder) -> VfsResult<()> {
        sqlx::query(
            "INSERT INTO folders (id, fs_id, parent_id, name, description, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(folder.id)
        .bind(folder.fs_id)
        .bind(folder.parent_id)
        .bind(&folder.name)
        .bind(&folder.description)
        .bind(folder.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to persist folder", e))?;

        Ok(())
    }

    async fn persist_deleted_folder(&self, folder_id: Uuid) -> VfsResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM files WHERE folder_id = ?")
            .bind(folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to delete folder files", e)
            })?;

        sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;

        tx.commit().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    async fn persist_renamed_folder(&self, folder: &Folder) -> VfsResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE folders SET name = ? WHERE id = ?")
            .bind(&folder.name)
            .bind(folder.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to rename folder", e)
            })?;

        sqlx::query("UPDATE files SET folder_name = ? WHERE folder_id = ?")
            .bind(&folder.name)
            .bind(folder.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                VfsError::with_source(ErrorKind::Database, "Failed to update file folder names", e)
            })?;

        tx.commit().await.map_err(|e| {
            VfsError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    async fn persist_new_file(&self, file: &File) -> VfsResult<()> {
        sqlx::query(
            "INSERT INTO files (id, folder_id, fs_id, name, folder_name, description, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(file.id)
        .bind(file.folder_id)
        .bind(file.fs_id)
        .bind(&file.name)
        .bind(&file.folder_name)
        .bind(&file.description)
        .bind(file.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to persist file", e))?;

        Ok(())
    }

    async fn persist_deleted_file(&self, file_id: Uuid) -> VfsResult<()> {
        sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| VfsError::with_source(ErrorKind::Database, "Failed to delete file", e))?;

        Ok(())
    }
}
