//! SQLite-backed gateway implementations.

pub mod filesystem;
pub mod user;

pub use filesystem::FileSystemRepository;
pub use user::UserRepository;
