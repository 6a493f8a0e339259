//! Append-only session history store.
//!
//! Sessions are persisted as one JSON array. A missing file reads as an
//! empty history; appending assigns the session's identity fields and
//! rewrites the array in place, pretty-printed so the file stays
//! externally readable.

use std::path::{Path, PathBuf};

use chrono::Utc;

use prepdrill_core::model::Session;

use crate::error::StoreError;

/// File-backed store of completed sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all stored sessions, oldest first. A missing file is an empty
    /// history, not an error.
    pub fn load(&self) -> Result<Vec<Session>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a finished session, assigning its id (count of prior
    /// sessions + 1) and timestamp. Returns the stored session.
    pub fn append(&self, mut session: Session) -> Result<Session, StoreError> {
        let mut sessions = self.load()?;

        session.session_id = Some(sessions.len() as u32 + 1);
        session.timestamp = Some(Utc::now().to_rfc3339());
        sessions.push(session.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&sessions).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(session)
    }
}
