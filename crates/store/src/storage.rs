//! Fail-soft JSON persistence for whole collections.
//!
//! Collections are small (a household shopping list), so every mutation
//! rewrites the whole file. Reads degrade to an empty collection on any
//! failure; writes go through a temp file in the target directory and an
//! atomic rename, so a crash mid-write never truncates a collection.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, StorageError};

/// Read a collection from `path`.
///
/// A missing file yields an empty collection silently; an unreadable or
/// malformed file yields an empty collection with a warning. Callers never
/// see a read error.
#[must_use]
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                "malformed collection in {}, starting empty: {e}",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Write a collection to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails. The
/// previous file contents survive a failed write.
pub fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| StorageError::NoParent(path.to_path_buf()))?;
    fs::create_dir_all(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let contents = serde_json::to_vec_pretty(items)?;

    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(temp.path(), &contents).map_err(|source| StorageError::Io {
        path: temp.path().to_path_buf(),
        source,
    })?;
    temp.persist(path).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let items: Vec<serde_json::Value> = read_collection(&dir.path().join("nope.json"));
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let items: Vec<serde_json::Value> = read_collection(&path);
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("items.json");
        let values = vec![serde_json::json!({"id": "a"}), serde_json::json!({"id": "b"})];
        write_collection(&path, &values).unwrap();
        let back: Vec<serde_json::Value> = read_collection(&path);
        assert_eq!(back, values);
    }
}
