//! Integration tests running the full stack against in-memory SQLite.

mod helpers;

mod file_test;
mod folder_test;
mod user_test;
