//! File service.

use std::sync::Arc;

use tracing::info;

use vfs_core::traits::IdGenerator;
use vfs_core::types::SortSpec;
use vfs_core::VfsResult;
use vfs_entity::file::CreateFile;
use vfs_entity::gateway::FileSystemGateway;

use crate::view::FileView;

/// Creates, deletes, and lists files inside a user's folders.
pub struct FileService {
    filesystems: Arc<dyn FileSystemGateway>,
    ids: Arc<dyn IdGenerator>,
}

impl FileService {
    /// Create a new file service.
    pub fn new(filesystems: Arc<dyn FileSystemGateway>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { filesystems, ids }
    }

    /// Create a file in the named folder.
    pub async fn create_file(
        &self,
        username: &str,
        folder_name: &str,
        data: CreateFile,
    ) -> VfsResult<FileView> {
        let mut fs = self.filesystems.load_tree(username).await?;
        let file = fs.root.create_file(folder_name, data, self.ids.as_ref())?;
        self.filesystems.persist_new_file(file).await?;

        info!(
            username = %username,
            folder = %file.folder_name,
            file = %file.name,
            "File created"
        );
        Ok(FileView::from_file(file, username))
    }

    /// Delete a file from the named folder.
    pub async fn delete_file(
        &self,
        username: &str,
        folder_name: &str,
        file_name: &str,
    ) -> VfsResult<()> {
        let mut fs = self.filesystems.load_tree(username).await?;
        let file = fs.root.delete_file(folder_name, file_name)?;
        self.filesystems.persist_deleted_file(file.id).await?;

        info!(
            username = %username,
            folder = %file.folder_name,
            file = %file.name,
            "File deleted"
        );
        Ok(())
    }

    /// List the files in the named folder. A folder without files is
    /// reported as an empty result.
    pub async fn list_files(
        &self,
        username: &str,
        folder_name: &str,
        sort: &SortSpec,
    ) -> VfsResult<Vec<FileView>> {
        sort.validate()?;

        let mut fs = self.filesystems.load_tree(username).await?;
        let views = fs
            .root
            .list_files(folder_name, sort)?
            .iter()
            .map(|file| FileView::from_file(file, username))
            .collect();
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use vfs_core::error::ErrorKind;
    use vfs_core::traits::MonotonicIdGenerator;
    use vfs_core::types::SortDirection;
    use vfs_database::memory::MemoryGateway;
    use vfs_entity::folder::CreateFolder;

    use crate::folder::FolderService;
    use crate::user::UserService;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap()
    }

    fn file(name: &str, offset: i64) -> CreateFile {
        CreateFile {
            name: name.to_string(),
            description: None,
            created_at: base() + Duration::seconds(offset),
        }
    }

    /// One user with `/home` containing three files.
    async fn services() -> (FolderService, FileService) {
        let gateway = Arc::new(MemoryGateway::new());
        let ids = Arc::new(MonotonicIdGenerator::new());
        let users = UserService::new(gateway.clone(), gateway.clone(), ids.clone());
        let folders = FolderService::new(gateway.clone(), ids.clone());
        let files = FileService::new(gateway, ids);

        users.register("caesar", base()).await.unwrap();
        folders
            .create_folder(
                "caesar",
                CreateFolder {
                    name: "/home".to_string(),
                    description: None,
                    created_at: base(),
                },
            )
            .await
            .unwrap();
        files.create_file("caesar", "/home", file("dev.conf", 0)).await.unwrap();
        files.create_file("caesar", "/home", file("prod.conf", 2)).await.unwrap();
        files.create_file("caesar", "/home", file("qa.conf", 1)).await.unwrap();
        (folders, files)
    }

    #[tokio::test]
    async fn test_list_files_defaults_to_name_ascending() {
        let (_, files) = services().await;
        let listed = files
            .list_files("caesar", "/home", &SortSpec::default())
            .await
            .unwrap();
        let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["dev.conf", "prod.conf", "qa.conf"]);
        assert!(listed.iter().all(|f| f.folder_name == "/home"));
        assert!(listed.iter().all(|f| f.username == "caesar"));
    }

    #[tokio::test]
    async fn test_list_files_by_created_ascending() {
        let (_, files) = services().await;
        let listed = files
            .list_files("caesar", "/home", &SortSpec::created(SortDirection::Asc))
            .await
            .unwrap();
        let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["dev.conf", "qa.conf", "prod.conf"]);
    }

    #[tokio::test]
    async fn test_create_file_rejects_duplicate_ignoring_case() {
        let (_, files) = services().await;
        let err = files
            .create_file("caesar", "/home", file("DEV.CONF", 3))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(err.message, "The DEV.CONF has already existed.");
    }

    #[tokio::test]
    async fn test_delete_file_persists() {
        let (_, files) = services().await;
        files.delete_file("caesar", "/home", "qa.conf").await.unwrap();

        let err = files
            .delete_file("caesar", "/home", "qa.conf")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotExists);

        let listed = files
            .list_files("caesar", "/home", &SortSpec::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_list_files_in_empty_folder() {
        let (folders, files) = services().await;
        folders
            .create_folder(
                "caesar",
                CreateFolder {
                    name: "/var".to_string(),
                    description: None,
                    created_at: base(),
                },
            )
            .await
            .unwrap();

        let err = files
            .list_files("caesar", "/var", &SortSpec::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyResult);
        assert_eq!(err.message, "The folder is empty.");
    }

    #[tokio::test]
    async fn test_folder_rename_rewrites_listed_folder_names() {
        let (folders, files) = services().await;
        folders.rename_folder("caesar", "/home", "/opt").await.unwrap();

        let listed = files
            .list_files("caesar", "/opt", &SortSpec::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|f| f.folder_name == "/opt"));
    }
}
