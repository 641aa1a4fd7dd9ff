//! In-memory gateway implementation.
//!
//! Backs service unit tests without touching SQLite. Observable
//! behavior matches the repositories: loads return detached clones and
//! persist calls are the only way changes become visible.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use vfs_core::{VfsError, VfsResult};
use vfs_entity::file::File;
use vfs_entity::filesystem::FileSystem;
use vfs_entity::folder::Folder;
use vfs_entity::gateway::{FileSystemGateway, UserGateway};
use vfs_entity::user::User;

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<String, User>,
    filesystems: HashMap<Uuid, FileSystem>,
}

/// Gateway keeping all state in process memory.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl MemoryGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }
}

fn fs_mut(state: &mut MemoryState, fs_id: Uuid) -> VfsResult<&mut FileSystem> {
    state
        .filesystems
        .get_mut(&fs_id)
        .ok_or_else(|| VfsError::internal("Unknown file system"))
}

fn folder_mut(root: &mut Folder, folder_id: Uuid) -> VfsResult<&mut Folder> {
    if root.id == folder_id {
        return Ok(root);
    }
    root.folders
        .iter_mut()
        .find(|folder| folder.id == folder_id)
        .ok_or_else(|| VfsError::internal("Unknown folder"))
}

#[async_trait]
impl UserGateway for MemoryGateway {
    async fn load_user(&self, username: &str) -> VfsResult<User> {
        let state = self.state.lock().await;
        state
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| VfsError::not_exists(username))
    }

    async fn persist_new_user(&self, user: &User) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        state.users.insert(user.username.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl FileSystemGateway for MemoryGateway {
    async fn load_tree(&self, username: &str) -> VfsResult<FileSystem> {
        let state = self.state.lock().await;
        state
            .filesystems
            .values()
            .find(|fs| fs.username == username)
            .cloned()
            .ok_or_else(|| VfsError::not_exists(username))
    }

    async fn persist_new_filesystem(&self, filesystem: &FileSystem) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        state.filesystems.insert(filesystem.id, filesystem.clone());
        Ok(())
    }

    async fn persist_new_folder(&self, folder: &Folder) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        let fs = fs_mut(&mut state, folder.fs_id)?;
        fs.root.folders.push(folder.clone());
        Ok(())
    }

    async fn persist_deleted_folder(&self, folder_id: Uuid) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        for fs in state.filesystems.values_mut() {
            fs.root.folders.retain(|folder| folder.id != folder_id);
        }
        Ok(())
    }

    async fn persist_renamed_folder(&self, folder: &Folder) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        let fs = fs_mut(&mut state, folder.fs_id)?;
        let stored = folder_mut(&mut fs.root, folder.id)?;
        *stored = folder.clone();
        Ok(())
    }

    async fn persist_new_file(&self, file: &File) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        let fs = fs_mut(&mut state, file.fs_id)?;
        let folder = folder_mut(&mut fs.root, file.folder_id)?;
        folder.files.push(file.clone());
        Ok(())
    }

    async fn persist_deleted_file(&self, file_id: Uuid) -> VfsResult<()> {
        let mut state = self.state.lock().await;
        for fs in state.filesystems.values_mut() {
            fs.root.files.retain(|file| file.id != file_id);
            for folder in &mut fs.root.folders {
                folder.files.retain(|file| file.id != file_id);
            }
        }
        Ok(())
    }
}
