//! Session persistence
//!
//! The session is the client's only piece of durable state: which wallet is
//! authenticated and its last-known balance, cached from the auth response.
//! The backend owns the canonical balance; the client never reconciles drift
//! except by re-fetching.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Exists exactly while the user is logged in. No expiry, refresh token, or
/// revocation handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub address: String,
    pub balance: f64,
}

#[derive(Clone)]
pub struct SessionStore {
    base_path: PathBuf,
}

impl SessionStore {
    /// Create a store with the default base directory ("./wallet-data")
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from("./wallet-data"),
        }
    }

    /// Create a store with a custom base directory (for testing)
    pub fn new_with_base_dir(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    fn session_file(&self) -> PathBuf {
        self.base_path.join("session.json")
    }

    /// Read the persisted session, once at process start. An absent file
    /// means nobody is logged in.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let path = self.session_file();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let session = serde_json::from_str(&contents)?;
        Ok(Some(session))
    }

    /// Persist the session after a successful auth response.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(self.session_file(), json)?;
        Ok(())
    }

    /// Drop the persisted session on logout. Clearing an absent session is
    /// not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        let path = self.session_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
