//! Store error types.
//!
//! Defined here so callers can distinguish a missing file (a valid empty
//! result for the history store) from actual I/O or format failures
//! without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the question bank and session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but does not parse.
    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns `true` when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
