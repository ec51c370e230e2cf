//! One-time seed merge from a static JSON file.
//!
//! The seed is consumed read-only. A missing file is the normal case after
//! first use (and on machines without one); it is not an error. Records whose
//! id already exists in the list are dropped - the seed never overwrites
//! user data.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::models::{ShoppingItem, image_or_fallback};

/// Shape of the seed resource: `{ "items": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}

/// Read and parse the seed file. Any failure yields `None`.
pub(crate) fn load(path: &Path) -> Option<SeedFile> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::warn!("ignoring malformed seed file {}: {e}", path.display());
            None
        }
    }
}

/// Append seed records whose id is not already present.
///
/// Returns how many records were appended. Existing records keep their
/// values untouched; appended records get their image normalized and their
/// status flags defaulted by deserialization.
pub(crate) fn merge(items: &mut Vec<ShoppingItem>, seed: SeedFile) -> usize {
    let mut known: HashSet<String> = items.iter().map(|i| i.id.to_string()).collect();
    let mut appended = 0;
    for mut record in seed.items {
        if !known.insert(record.id.to_string()) {
            continue;
        }
        record.image = image_or_fallback(&record.image);
        items.push(record);
        appended += 1;
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_with(ids: &[&str]) -> SeedFile {
        let items = ids
            .iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({"id": id, "name": "x"})).unwrap()
            })
            .collect();
        SeedFile { items }
    }

    #[test]
    fn test_merge_skips_existing_ids() {
        let mut items: Vec<ShoppingItem> =
            vec![serde_json::from_value(serde_json::json!({"id": "a", "name": "kept"})).unwrap()];
        let appended = merge(&mut items, seed_with(&["a", "b"]));
        assert_eq!(appended, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().map(|i| i.name.as_str()), Some("kept"));
    }

    #[test]
    fn test_merge_drops_duplicate_ids_within_seed() {
        let mut items = Vec::new();
        let appended = merge(&mut items, seed_with(&["a", "a"]));
        assert_eq!(appended, 1);
    }

    #[test]
    fn test_merged_records_get_image_fallback() {
        let mut items = Vec::new();
        merge(&mut items, seed_with(&["a"]));
        assert_eq!(
            items.first().map(|i| i.image.as_str()),
            Some(crate::models::FALLBACK_IMAGE)
        );
    }
}
