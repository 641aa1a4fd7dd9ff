//! File commands.

use chrono::Utc;
use clap::Args;

use vfs_core::VfsResult;
use vfs_entity::file::CreateFile;

use crate::commands::{Services, SortArgs};
use crate::output;

/// Arguments for `create-file`.
#[derive(Args)]
pub struct CreateFileArgs {
    /// Owner of the folder
    pub username: String,
    /// Folder to create the file in
    pub foldername: String,
    /// Name of the file to create
    pub filename: String,
    /// Optional description
    pub description: Option<String>,
}

/// Arguments for `delete-file`.
#[derive(Args)]
pub struct DeleteFileArgs {
    /// Owner of the folder
    pub username: String,
    /// Folder holding the file
    pub foldername: String,
    /// Name of the file to delete
    pub filename: String,
}

/// Arguments for `list-files`.
#[derive(Args)]
pub struct ListFilesArgs {
    /// Owner of the folder
    pub username: String,
    /// Folder to list
    pub foldername: String,

    #[command(flatten)]
    pub sort: SortArgs,
}

pub async fn create(services: &Services, args: &CreateFileArgs) -> VfsResult<()> {
    let data = CreateFile {
        name: args.filename.clone(),
        description: args.description.clone(),
        created_at: Utc::now(),
    };

    match services
        .files
        .create_file(&args.username, &args.foldername, data)
        .await
    {
        Ok(_) => {
            output::print_success(&format!(
                "Create {} in {}/{} successfully.",
                args.filename, args.username, args.foldername
            ));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}

pub async fn delete(services: &Services, args: &DeleteFileArgs) -> VfsResult<()> {
    match services
        .files
        .delete_file(&args.username, &args.foldername, &args.filename)
        .await
    {
        Ok(()) => {
            output::print_success(&format!(
                "Delete {} in {}/{} successfully.",
                args.filename, args.username, args.foldername
            ));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}

pub async fn list(services: &Services, args: &ListFilesArgs) -> VfsResult<()> {
    match services
        .files
        .list_files(&args.username, &args.foldername, &args.sort.to_spec())
        .await
    {
        Ok(files) => {
            output::print_files(&files);
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}
