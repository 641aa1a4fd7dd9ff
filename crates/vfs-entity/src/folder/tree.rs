//! Namespace operations over the folder tree.
//!
//! All operations are methods called on the root [`Folder`] and mutate
//! the tree in memory only; persisting the outcome is the caller's
//! concern. Lookup first matches the root's own name exactly, so `/`
//! resolves to the root itself; sibling lookups ignore case.

use vfs_core::traits::IdGenerator;
use vfs_core::types::SortSpec;
use vfs_core::{VfsError, VfsResult};

use crate::file::{CreateFile, File};
use crate::folder::{CreateFolder, Folder};
use crate::name::validate_folder_name;

impl Folder {
    /// Resolve a folder by name: the root itself on an exact match,
    /// otherwise a case-insensitive scan of its sub-folders.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        if self.name == name {
            return Some(self);
        }
        let lowered = name.to_lowercase();
        self.folders
            .iter()
            .find(|folder| folder.name.to_lowercase() == lowered)
    }

    /// Mutable variant of [`Folder::find_folder`].
    pub fn find_folder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        if self.name == name {
            return Some(self);
        }
        let lowered = name.to_lowercase();
        self.folders
            .iter_mut()
            .find(|folder| folder.name.to_lowercase() == lowered)
    }

    /// Create a sub-folder, rejecting names already taken by the root
    /// or a sibling.
    pub fn create_folder(
        &mut self,
        data: CreateFolder,
        ids: &dyn IdGenerator,
    ) -> VfsResult<&Folder> {
        if self.find_folder(&data.name).is_some() {
            return Err(VfsError::already_exists(&data.name));
        }
        let folder = Folder::new(self, data, ids)?;
        let index = self.folders.len();
        self.folders.push(folder);
        Ok(&self.folders[index])
    }

    /// Remove a sub-folder by name and return it together with its
    /// files. The root only holds other folders as direct children, so
    /// `/` itself can never be deleted.
    pub fn delete_folder(&mut self, name: &str) -> VfsResult<Folder> {
        let lowered = name.to_lowercase();
        let index = self
            .folders
            .iter()
            .position(|folder| folder.name.to_lowercase() == lowered)
            .ok_or_else(|| VfsError::not_exists(name))?;
        Ok(self.folders.remove(index))
    }

    /// Sort the sub-folders in place and return them.
    pub fn list_folders(&mut self, sort: &SortSpec) -> &[Folder] {
        sort.sort(&mut self.folders);
        &self.folders
    }

    /// Rename a sub-folder and rewrite the denormalized folder name on
    /// every file it holds.
    pub fn rename_folder(&mut self, name: &str, new_name: &str) -> VfsResult<&Folder> {
        validate_folder_name(new_name)?;
        if self.find_folder(new_name).is_some() {
            return Err(VfsError::already_exists(new_name));
        }
        let lowered = name.to_lowercase();
        let folder = self
            .folders
            .iter_mut()
            .find(|folder| folder.name.to_lowercase() == lowered)
            .ok_or_else(|| VfsError::not_exists(name))?;
        folder.name = new_name.to_string();
        for file in &mut folder.files {
            file.folder_name = new_name.to_string();
        }
        Ok(folder)
    }

    /// Create a file in the named folder, rejecting names already taken
    /// inside it.
    pub fn create_file(
        &mut self,
        folder_name: &str,
        data: CreateFile,
        ids: &dyn IdGenerator,
    ) -> VfsResult<&File> {
        let folder = self
            .find_folder_mut(folder_name)
            .ok_or_else(|| VfsError::not_exists(folder_name))?;
        let lowered = data.name.to_lowercase();
        if folder
            .files
            .iter()
            .any(|file| file.name.to_lowercase() == lowered)
        {
            return Err(VfsError::already_exists(&data.name));
        }
        let file = File::new(folder, data, ids)?;
        let index = folder.files.len();
        folder.files.push(file);
        Ok(&folder.files[index])
    }

    /// Remove a file from the named folder and return it.
    pub fn delete_file(&mut self, folder_name: &str, file_name: &str) -> VfsResult<File> {
        let folder = self
            .find_folder_mut(folder_name)
            .ok_or_else(|| VfsError::not_exists(folder_name))?;
        let lowered = file_name.to_lowercase();
        let index = folder
            .files
            .iter()
            .position(|file| file.name.to_lowercase() == lowered)
            .ok_or_else(|| VfsError::not_exists(file_name))?;
        Ok(folder.files.remove(index))
    }

    /// Sort the named folder's files in place and return them. An
    /// existing folder with no files is reported as an empty result.
    pub fn list_files(&mut self, folder_name: &str, sort: &SortSpec) -> VfsResult<&[File]> {
        let folder = self
            .find_folder_mut(folder_name)
            .ok_or_else(|| VfsError::not_exists(folder_name))?;
        if folder.files.is_empty() {
            return Err(VfsError::empty_files());
        }
        sort.sort(&mut folder.files);
        Ok(&folder.files)
    }
}
