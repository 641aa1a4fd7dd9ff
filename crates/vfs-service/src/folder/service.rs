//! Folder service.

use std::sync::Arc;

use tracing::info;

use vfs_core::traits::IdGenerator;
use vfs_core::types::SortSpec;
use vfs_core::{VfsError, VfsResult};
use vfs_entity::folder::CreateFolder;
use vfs_entity::gateway::FileSystemGateway;

use crate::view::FolderView;

/// Creates, deletes, lists, and renames a user's folders.
pub struct FolderService {
    filesystems: Arc<dyn FileSystemGateway>,
    ids: Arc<dyn IdGenerator>,
}

impl FolderService {
    /// Create a new folder service.
    pub fn new(filesystems: Arc<dyn FileSystemGateway>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { filesystems, ids }
    }

    /// Create a folder in the user's file system.
    pub async fn create_folder(
        &self,
        username: &str,
        data: CreateFolder,
    ) -> VfsResult<FolderView> {
        let mut fs = self.filesystems.load_tree(username).await?;
        let folder = fs.root.create_folder(data, self.ids.as_ref())?;
        self.filesystems.persist_new_folder(folder).await?;

        info!(username = %username, folder = %folder.name, "Folder created");
        Ok(FolderView::from_folder(folder, username))
    }

    /// Delete a folder and every file inside it.
    pub async fn delete_folder(&self, username: &str, name: &str) -> VfsResult<()> {
        let mut fs = self.filesystems.load_tree(username).await?;
        let folder = fs.root.delete_folder(name)?;
        self.filesystems.persist_deleted_folder(folder.id).await?;

        info!(username = %username, folder = %folder.name, "Folder deleted");
        Ok(())
    }

    /// List the user's folders. A user without folders is reported as
    /// an empty result.
    pub async fn list_folders(
        &self,
        username: &str,
        sort: &SortSpec,
    ) -> VfsResult<Vec<FolderView>> {
        sort.validate()?;

        let mut fs = self.filesystems.load_tree(username).await?;
        if fs.root.folders.is_empty() {
            return Err(VfsError::empty_folders(username));
        }

        let views = fs
            .root
            .list_folders(sort)
            .iter()
            .map(|folder| FolderView::from_folder(folder, username))
            .collect();
        Ok(views)
    }

    /// Rename a folder, keeping the folder name on its files in step.
    pub async fn rename_folder(
        &self,
        username: &str,
        name: &str,
        new_name: &str,
    ) -> VfsResult<FolderView> {
        let mut fs = self.filesystems.load_tree(username).await?;
        let folder = fs.root.rename_folder(name, new_name)?;
        self.filesystems.persist_renamed_folder(folder).await?;

        info!(username = %username, folder = %folder.name, "Folder renamed");
        Ok(FolderView::from_folder(folder, username))
    }
}
