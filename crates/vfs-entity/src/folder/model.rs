//! Folder model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vfs_core::traits::IdGenerator;
use vfs_core::types::Sortable;
use vfs_core::VfsResult;

use crate::file::File;
use crate::name::validate_folder_name;

/// Name of the root folder every file system starts with.
pub const ROOT_NAME: &str = "/";

/// A folder in a user's file system.
///
/// The root folder has no parent and may contain sub-folders; all other
/// folders sit directly under the root and contain only files.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Folder {
    /// Unique identifier.
    pub id: Uuid,
    /// The file system this folder belongs to.
    pub fs_id: Uuid,
    /// Parent folder id, `None` for the root.
    pub parent_id: Option<Uuid>,
    /// Folder name, unique among siblings ignoring case.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Files stored in this folder, in insertion order.
    #[sqlx(skip)]
    pub files: Vec<File>,
    /// Sub-folders, in insertion order.
    #[sqlx(skip)]
    pub folders: Vec<Folder>,
}

/// Data for creating a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Build the root folder of a freshly provisioned file system.
    pub(crate) fn root(fs_id: Uuid, created_at: DateTime<Utc>, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            fs_id,
            parent_id: None,
            name: ROOT_NAME.to_string(),
            description: None,
            created_at,
            files: Vec::new(),
            folders: Vec::new(),
        }
    }

    /// Build a folder under `parent` after validating its name.
    pub(crate) fn new(parent: &Folder, data: CreateFolder, ids: &dyn IdGenerator) -> VfsResult<Self> {
        validate_folder_name(&data.name)?;
        Ok(Self {
            id: ids.next_id(),
            fs_id: parent.fs_id,
            parent_id: Some(parent.id),
            name: data.name,
            description: data.description,
            created_at: data.created_at,
            files: Vec::new(),
            folders: Vec::new(),
        })
    }
}

impl Sortable for Folder {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
