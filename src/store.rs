//! Session File Store
//!
//! The terminal client keeps its login in a small TOML file so successive
//! commands share one session, the way the browser shares localStorage.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::session::{Session, SessionStore, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    users_id: Option<String>,
}

/// Session persisted to a TOML file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, StoreError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        let stored: StoredSession =
            toml::from_str(&content).map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(Session {
            token: stored.token,
            user_id: stored.users_id,
        })
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }

        let stored = StoredSession {
            token: session.token.clone(),
            users_id: session.user_id.clone(),
        };
        let content = toml::to_string(&stored).map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!("Saved session to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(e.to_string())),
        }
    }
}
