//! Error types for store and seeding operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, merging, or persisting the store.
///
/// A missing store file is not represented here: absence is a normal state
/// (the store has simply never been written) and loads as an empty store.
/// Everything else fails the run before the store file is touched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The phrase input file could not be read.
    #[error("failed to read phrase file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but could not be read.
    #[error("failed to read store file {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a valid phrase mapping.
    #[error("malformed store file {path}: {source}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The merged store could not be serialized.
    #[error("failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The merged store could not be written back.
    #[error("failed to write store file {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
