//! Storage error types.
//!
//! Reads never produce errors - a missing or malformed collection degrades to
//! an empty one (see [`crate::storage`]). Only writing a collection back to
//! disk is fallible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when persisting a collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage path has no parent directory to write into.
    #[error("storage path {0} has no parent directory")]
    NoParent(PathBuf),

    /// Filesystem write failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for [`StorageError`].
pub type Result<T> = std::result::Result<T, StorageError>;
