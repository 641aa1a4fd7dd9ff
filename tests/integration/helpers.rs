//! Shared test harness.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::sqlite::SqlitePool;

use vfs_core::traits::{IdGenerator, MonotonicIdGenerator};
use vfs_database::migration::run_migrations;
use vfs_database::repositories::{FileSystemRepository, UserRepository};
use vfs_database::DatabasePool;
use vfs_entity::file::CreateFile;
use vfs_entity::folder::CreateFolder;
use vfs_service::{FileService, FolderService, UserService};

/// The full application wired against an in-memory SQLite database.
pub struct TestApp {
    pub users: UserService,
    pub folders: FolderService,
    pub files: FileService,
    /// Direct pool access for asserting on stored rows.
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DatabasePool::connect_in_memory().await.unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.into_pool();

        let users = Arc::new(UserRepository::new(pool.clone()));
        let filesystems = Arc::new(FileSystemRepository::new(pool.clone()));
        let ids: Arc<dyn IdGenerator> = Arc::new(MonotonicIdGenerator::new());

        Self {
            users: UserService::new(users, filesystems.clone(), ids.clone()),
            folders: FolderService::new(filesystems.clone(), ids.clone()),
            files: FileService::new(filesystems, ids),
            pool,
        }
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap()
}

pub fn folder(name: &str, offset: i64) -> CreateFolder {
    CreateFolder {
        name: name.to_string(),
        description: None,
        created_at: base_time() + Duration::seconds(offset),
    }
}

pub fn file(name: &str, offset: i64) -> CreateFile {
    CreateFile {
        name: name.to_string(),
        description: None,
        created_at: base_time() + Duration::seconds(offset),
    }
}
