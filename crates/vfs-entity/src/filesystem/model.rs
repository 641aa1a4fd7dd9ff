//! File system model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vfs_core::traits::IdGenerator;

use crate::folder::Folder;

/// A user's private namespace: a root folder and everything under it.
///
/// Each user owns exactly one file system, provisioned at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSystem {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning username.
    pub username: String,
    /// The root folder, named `/`, holding all other entries.
    pub root: Folder,
}

impl FileSystem {
    /// Provision a fresh file system with an empty root folder.
    pub fn provision(username: &str, created_at: DateTime<Utc>, ids: &dyn IdGenerator) -> Self {
        let id = ids.next_id();
        Self {
            id,
            username: username.to_string(),
            root: Folder::root(id, created_at, ids),
        }
    }
}
