//! Name validation rules for users, folders, and files.
//!
//! A name is valid when it fits the length limit in bytes and every
//! character is a Unicode letter, a Unicode number, or one of the
//! punctuation characters allowed for that entity kind.

use vfs_core::{VfsError, VfsResult};

/// Maximum username length in bytes.
pub const MAX_USERNAME_LEN: usize = 64;

/// Maximum folder and file name length in bytes.
pub const MAX_NAME_LEN: usize = 256;

/// Validate a username.
pub fn validate_username(name: &str) -> VfsResult<()> {
    validate(name, MAX_USERNAME_LEN, &['_', '-'])
}

/// Validate a folder name.
pub fn validate_folder_name(name: &str) -> VfsResult<()> {
    validate(name, MAX_NAME_LEN, &['_', '-', '/', ' '])
}

/// Validate a file name.
pub fn validate_file_name(name: &str) -> VfsResult<()> {
    validate(name, MAX_NAME_LEN, &['_', '-', '.', ' '])
}

fn validate(name: &str, max_len: usize, extra: &[char]) -> VfsResult<()> {
    if name.len() > max_len {
        return Err(VfsError::invalid_name(name));
    }
    if name
        .chars()
        .all(|c| c.is_alphanumeric() || extra.contains(&c))
    {
        Ok(())
    } else {
        Err(VfsError::invalid_name(name))
    }
}
