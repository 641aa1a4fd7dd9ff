//! User model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vfs_core::VfsResult;

use crate::name::validate_username;

/// An account that owns exactly one file system.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique username, also the key the file system is looked up by.
    pub username: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user after validating the username.
    pub fn new(username: &str, created_at: DateTime<Utc>) -> VfsResult<Self> {
        validate_username(username)?;
        Ok(Self {
            username: username.to_string(),
            created_at,
        })
    }
}
