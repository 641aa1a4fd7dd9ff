//! Convenience result type alias for vFS.

use crate::error::VfsError;

/// A specialized `Result` type for vFS operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, VfsError>` explicitly.
pub type VfsResult<T> = Result<T, VfsError>;
