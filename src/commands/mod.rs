//! CLI command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod user;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};

use vfs_core::config::AppConfig;
use vfs_core::traits::{IdGenerator, MonotonicIdGenerator};
use vfs_core::types::{SortDirection, SortSpec};
use vfs_core::VfsResult;
use vfs_database::migration::run_migrations;
use vfs_database::repositories::{FileSystemRepository, UserRepository};
use vfs_database::DatabasePool;
use vfs_service::{FileService, FolderService, UserService};

/// vFS — a per-user virtual file system.
#[derive(Parser)]
#[command(name = "vfs", version, about)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    Register(user::RegisterArgs),
    /// Create a folder
    CreateFolder(folder::CreateFolderArgs),
    /// Delete a folder and the files it holds
    DeleteFolder(folder::DeleteFolderArgs),
    /// List a user's folders
    ListFolders(folder::ListFoldersArgs),
    /// Rename a folder
    RenameFolder(folder::RenameFolderArgs),
    /// Create a file in a folder
    CreateFile(file::CreateFileArgs),
    /// Delete a file from a folder
    DeleteFile(file::DeleteFileArgs),
    /// List the files in a folder
    ListFiles(file::ListFilesArgs),
}

impl Cli {
    /// Wire up services and run the selected command.
    pub async fn execute(self, config: &AppConfig) -> VfsResult<()> {
        let services = Services::init(config).await?;

        match self.command {
            Commands::Register(args) => user::register(&services, &args).await,
            Commands::CreateFolder(args) => folder::create(&services, &args).await,
            Commands::DeleteFolder(args) => folder::delete(&services, &args).await,
            Commands::ListFolders(args) => folder::list(&services, &args).await,
            Commands::RenameFolder(args) => folder::rename(&services, &args).await,
            Commands::CreateFile(args) => file::create(&services, &args).await,
            Commands::DeleteFile(args) => file::delete(&services, &args).await,
            Commands::ListFiles(args) => file::list(&services, &args).await,
        }
    }
}

/// Services shared by the command handlers.
pub struct Services {
    pub users: UserService,
    pub folders: FolderService,
    pub files: FileService,
}

impl Services {
    /// Open the database, apply migrations, and build the services.
    async fn init(config: &AppConfig) -> VfsResult<Self> {
        let pool = DatabasePool::connect(&config.database).await?.into_pool();
        run_migrations(&pool).await?;

        let users = Arc::new(UserRepository::new(pool.clone()));
        let filesystems = Arc::new(FileSystemRepository::new(pool));
        let ids: Arc<dyn IdGenerator> = Arc::new(MonotonicIdGenerator::new());

        Ok(Self {
            users: UserService::new(users, filesystems.clone(), ids.clone()),
            folders: FolderService::new(filesystems.clone(), ids.clone()),
            files: FileService::new(filesystems, ids),
        })
    }
}

/// Sort flags shared by the list commands.
#[derive(Args)]
pub struct SortArgs {
    /// Sort by name
    #[arg(long, value_enum, value_name = "ORDER")]
    pub sort_name: Option<SortOrder>,

    /// Sort by creation time
    #[arg(long, value_enum, value_name = "ORDER", conflicts_with = "sort_name")]
    pub sort_created: Option<SortOrder>,
}

impl SortArgs {
    /// Translate the flags into a sort spec, defaulting to name
    /// ascending when neither flag is given.
    pub fn to_spec(&self) -> SortSpec {
        match (self.sort_name, self.sort_created) {
            (_, Some(order)) => SortSpec::created(order.into()),
            (Some(order), None) => SortSpec::name(order.into()),
            (None, None) => SortSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }
    }
}
