//! Folder entity and namespace tree operations.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, ROOT_NAME};
