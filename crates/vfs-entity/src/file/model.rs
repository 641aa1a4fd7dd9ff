//! File model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vfs_core::traits::IdGenerator;
use vfs_core::types::Sortable;
use vfs_core::VfsResult;

use crate::folder::Folder;
use crate::name::validate_file_name;

/// A named entry stored inside a folder.
///
/// `folder_name` denormalizes the containing folder's name so listings
/// never need a join. Renaming a folder rewrites it on every file.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct File {
    /// Unique identifier.
    pub id: Uuid,
    /// The folder this file lives in.
    pub folder_id: Uuid,
    /// The file system this file belongs to.
    pub fs_id: Uuid,
    /// File name, unique within its folder ignoring case.
    pub name: String,
    /// Name of the containing folder.
    pub folder_name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// File name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl File {
    /// Build a file inside `folder` after validating its name.
    pub(crate) fn new(folder: &Folder, data: CreateFile, ids: &dyn IdGenerator) -> VfsResult<Self> {
        validate_file_name(&data.name)?;
        Ok(Self {
            id: ids.next_id(),
            folder_id: folder.id,
            fs_id: folder.fs_id,
            name: data.name,
            folder_name: folder.name.clone(),
            description: data.description,
            created_at: data.created_at,
        })
    }
}

impl Sortable for File {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
