//! Terminal output for command results.
//!
//! Expected domain conditions are part of normal operation: they are
//! printed and the process still exits successfully. Only
//! infrastructure failures propagate out of the handlers.

use vfs_core::error::ErrorKind;
use vfs_core::{VfsError, VfsResult};
use vfs_service::{FileView, FolderView};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print a success message to stdout.
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Print a notice to stdout.
pub fn print_notice(message: &str) {
    println!("{}", message);
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

/// Print folder listing rows, one folder per line.
pub fn print_folders(folders: &[FolderView]) {
    for folder in folders {
        let created = folder.created_at.format(TIME_FORMAT);
        match folder.description.as_deref() {
            Some(description) if !description.is_empty() => println!(
                "{} {} {} {}",
                folder.name, description, created, folder.username
            ),
            _ => println!("{} {} {}", folder.name, created, folder.username),
        }
    }
}

/// Print file listing rows, one file per line.
pub fn print_files(files: &[FileView]) {
    for file in files {
        let created = file.created_at.format(TIME_FORMAT);
        match file.description.as_deref() {
            Some(description) if !description.is_empty() => println!(
                "{} {} {} {} {}",
                file.name, description, created, file.folder_name, file.username
            ),
            _ => println!(
                "{} {} {} {}",
                file.name, created, file.folder_name, file.username
            ),
        }
    }
}

/// Render an operation error: expected conditions print and succeed,
/// anything else propagates to the caller.
pub fn render_domain_error(err: VfsError) -> VfsResult<()> {
    match err.kind {
        ErrorKind::AlreadyExists | ErrorKind::NotExists | ErrorKind::InvalidName => {
            print_error(&err.message);
            Ok(())
        }
        ErrorKind::EmptyResult => {
            print_notice(&err.message);
            Ok(())
        }
        _ => Err(err),
    }
}
