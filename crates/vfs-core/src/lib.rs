//! # vfs-core
//!
//! Core crate for vFS. Contains configuration schemas, the id-generation
//! capability, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other vFS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::VfsError;
pub use result::VfsResult;
