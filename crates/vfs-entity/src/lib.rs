//! # vfs-entity
//!
//! Domain entities for vFS: users, file systems, folders, and files,
//! plus the in-memory tree operations that enforce the namespace rules
//! and the persistence gateway traits the entities are stored through.

pub mod file;
pub mod filesystem;
pub mod folder;
pub mod gateway;
pub mod name;
pub mod user;
