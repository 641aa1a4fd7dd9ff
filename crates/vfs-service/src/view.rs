//! Read models returned by listing and mutation operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use vfs_entity::file::File;
use vfs_entity::folder::Folder;

/// A folder as presented to callers.
#[derive(Debug, Clone, Serialize)]
pub struct FolderView {
    /// Folder name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Owning username.
    pub username: String,
}

impl FolderView {
    /// Build a view of `folder` owned by `username`.
    pub fn from_folder(folder: &Folder, username: &str) -> Self {
        Self {
            name: folder.name.clone(),
            description: folder.description.clone(),
            created_at: folder.created_at,
            username: username.to_string(),
        }
    }
}

/// A file as presented to callers.
#[derive(Debug, Clone, Serialize)]
pub struct FileView {
    /// File name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// Name of the containing folder.
    pub folder_name: String,
    /// Owning username.
    pub username: String,
}

impl FileView {
    /// Build a view of `file` owned by `username`.
    pub fn from_file(file: &File, username: &str) -> Self {
        Self {
            name: file.name.clone(),
            description: file.description.clone(),
            created_at: file.created_at,
            folder_name: file.folder_name.clone(),
            username: username.to_string(),
        }
    }
}
