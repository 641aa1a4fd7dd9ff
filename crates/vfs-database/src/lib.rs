//! # vfs-database
//!
//! Persistence layer for vFS: the SQLite connection pool, migrations,
//! gateway implementations backed by SQLite, and an in-memory gateway
//! for tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
