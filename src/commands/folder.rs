//! Folder commands.

use chrono::Utc;
use clap::Args;

use vfs_core::VfsResult;
use vfs_entity::folder::CreateFolder;

use crate::commands::{Services, SortArgs};
use crate::output;

/// Arguments for `create-folder`.
#[derive(Args)]
pub struct CreateFolderArgs {
    /// Owner of the folder
    pub username: String,
    /// Name of the folder to create
    pub foldername: String,
    /// Optional description
    pub description: Option<String>,
}

/// Arguments for `delete-folder`.
#[derive(Args)]
pub struct DeleteFolderArgs {
    /// Owner of the folder
    pub username: String,
    /// Name of the folder to delete
    pub foldername: String,
}

/// Arguments for `list-folders`.
#[derive(Args)]
pub struct ListFoldersArgs {
    /// Owner of the folders
    pub username: String,

    #[command(flatten)]
    pub sort: SortArgs,
}

/// Arguments for `rename-folder`.
#[derive(Args)]
pub struct RenameFolderArgs {
    /// Owner of the folder
    pub username: String,
    /// Current folder name
    pub foldername: String,
    /// New folder name
    pub new_foldername: String,
}

pub async fn create(services: &Services, args: &CreateFolderArgs) -> VfsResult<()> {
    let data = CreateFolder {
        name: args.foldername.clone(),
        description: args.description.clone(),
        created_at: Utc::now(),
    };

    match services.folders.create_folder(&args.username, data).await {
        Ok(_) => {
            output::print_success(&format!("Create {} successfully.", args.foldername));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}

pub async fn delete(services: &Services, args: &DeleteFolderArgs) -> VfsResult<()> {
    match services
        .folders
        .delete_folder(&args.username, &args.foldername)
        .await
    {
        Ok(()) => {
            output::print_success(&format!("Delete {} successfully.", args.foldername));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}

pub async fn list(services: &Services, args: &ListFoldersArgs) -> VfsResult<()> {
    match services
        .folders
        .list_folders(&args.username, &args.sort.to_spec())
        .await
    {
        Ok(folders) => {
            output::print_folders(&folders);
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}

pub async fn rename(services: &Services, args: &RenameFolderArgs) -> VfsResult<()> {
    match services
        .folders
        .rename_folder(&args.username, &args.foldername, &args.new_foldername)
        .await
    {
        Ok(_) => {
            output::print_success(&format!(
                "Rename {} to {} successfully.",
                args.foldername, args.new_foldername
            ));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}
