//! Unified application error types for vFS.
//!
//! All crates map their internal errors into [`VfsError`] for consistent
//! propagation through the ? operator. The domain constructors carry the
//! exact user-facing wording for each condition, so adapters can print
//! `message` verbatim.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A user, folder, or file with the same name already exists.
    AlreadyExists,
    /// The referenced user, folder, or file does not exist.
    NotExists,
    /// A name failed validation.
    InvalidName,
    /// A listing produced no entries.
    EmptyResult,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::NotExists => write!(f, "NOT_EXISTS"),
            Self::InvalidName => write!(f, "INVALID_NAME"),
            Self::EmptyResult => write!(f, "EMPTY_RESULT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout vFS.
///
/// All crate-specific errors are mapped into `VfsError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct VfsError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl VfsError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an already-exists error for the given name.
    pub fn already_exists(name: &str) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            format!("The {name} has already existed."),
        )
    }

    /// Create a not-exists error for the given name.
    pub fn not_exists(name: &str) -> Self {
        Self::new(ErrorKind::NotExists, format!("The {name} doesn't exist."))
    }

    /// Create an invalid-name error for the given name.
    pub fn invalid_name(name: &str) -> Self {
        Self::new(
            ErrorKind::InvalidName,
            format!("The {name} contain invalid chars."),
        )
    }

    /// Create an empty-result error for a user with no folders.
    pub fn empty_folders(username: &str) -> Self {
        Self::new(
            ErrorKind::EmptyResult,
            format!("Warning: The {username} doesn't have any folders."),
        )
    }

    /// Create an empty-result error for a folder with no files.
    pub fn empty_files() -> Self {
        Self::new(ErrorKind::EmptyResult, "The folder is empty.")
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for VfsError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for VfsError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
