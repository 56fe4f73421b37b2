//! Session persistence
//!
//! Mirrors the in-memory session to `session.json` so that one CLI
//! invocation can log in and later ones can read the signed-in user.

use std::path::PathBuf;

use tracing::debug;

use crate::error::SpendwiseError;
use crate::models::Session;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Loads and stores the current session
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored session, if any
    pub fn load(&self) -> Result<Option<Session>, SpendwiseError> {
        let session = read_json(&self.path)?;
        debug!(path = %self.path.display(), found = session.is_some(), "loaded session");
        Ok(session)
    }

    /// Persist `session`, replacing any previous one
    pub fn save(&self, session: &Session) -> Result<(), SpendwiseError> {
        write_json_atomic(&self.path, session)
    }

    /// Remove the stored session; returns whether one existed
    pub fn clear(&self) -> Result<bool, SpendwiseError> {
        remove_if_exists(&self.path)
    }
}
