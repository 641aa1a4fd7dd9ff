//! File system entity.

pub mod model;

pub use model::FileSystem;
