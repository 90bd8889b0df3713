//! JSON persistence for the phrase store.
//!
//! The store lives in a single JSON document: one object mapping each phrase
//! to its vote record, written with 4-space indentation so the file the
//! marquee generator reads stays human-editable. Loads and saves always
//! cover the whole document; there are no partial updates.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::PhraseStore;

impl PhraseStore {
    /// Load a store from the JSON document at `path`.
    ///
    /// A missing file is not an error — seeding may run before the store has
    /// ever been written, so absence yields an empty store. Any other read
    /// failure, and any parse failure, propagates: overwriting a store that
    /// could not be read would destroy live vote tallies.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file, starting empty");
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(StoreError::StoreRead {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };
        let store: Self = serde_json::from_str(&raw).map_err(|err| StoreError::MalformedStore {
            path: path.to_path_buf(),
            source: err,
        })?;
        debug!(path = %path.display(), records = store.len(), "store loaded");
        Ok(store)
    }

    /// Write the store to `path` as one pretty-printed JSON document,
    /// replacing any prior content.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(StoreError::Serialize)?;
        fs::write(path, &buf).map_err(|err| StoreError::StoreWrite {
            path: path.to_path_buf(),
            source: err,
        })?;
        debug!(path = %path.display(), records = self.len(), "store written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use crate::record::VoteRecord;

    #[test]
    fn load_missing_file_returns_empty_store() {
        let dir = tempdir().unwrap();
        let store = PhraseStore::load(&dir.path().join("data.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_reads_existing_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"cat": {"upvotes": 5, "downvotes": 1}}"#).unwrap();

        let store = PhraseStore::load(&path).unwrap();
        assert_eq!(
            store.get("cat"),
            Some(&VoteRecord {
                upvotes: 5,
                downvotes: 1
            })
        );
    }

    #[test]
    fn load_rejects_malformed_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json at all {").unwrap();

        let err = PhraseStore::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedStore { .. }));
    }

    #[test]
    fn save_uses_four_space_indentation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut store = PhraseStore::new();
        store.merge("cat");
        store.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n    \"cat\": {\n        \"upvotes\": 0,\n        \"downvotes\": 0\n    }\n}"
        );
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "stale content that is much longer than the new store").unwrap();

        PhraseStore::new().save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
