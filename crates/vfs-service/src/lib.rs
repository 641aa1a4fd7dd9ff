//! # vfs-service
//!
//! Application services for vFS. Each operation loads the owning
//! user's tree through a gateway, applies the change in memory where
//! the namespace rules live, then persists what changed.
//!
//! Services follow constructor injection; dependencies are provided at
//! construction time via `Arc` references.

pub mod file;
pub mod folder;
pub mod user;
pub mod view;

pub use file::FileService;
pub use folder::FolderService;
pub use user::UserService;
pub use view::{FileView, FolderView};
