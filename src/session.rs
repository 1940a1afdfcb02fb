//! Session
//!
//! The authenticated session is an explicit value handed to every page, not
//! something pages read out of ambient storage on their own. Persistence is
//! behind [`SessionStore`] so the browser (localStorage) and the terminal
//! (a file) share the same gate logic.

use crate::route::Route;

/// Authentication state of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token returned by the login endpoint
    pub token: Option<String>,
    /// Backend user id returned alongside the token
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id,
        }
    }

    /// Empty tokens count as absent
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}

/// Outcome of the session check a protected page runs on mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Token present: fetch with it
    Proceed(String),
    /// No token: go here and issue no request
    Redirect(Route),
}

/// Decide whether a protected page may fetch
pub fn gate(session: &Session) -> Gate {
    match session.token() {
        Some(token) => Gate::Proceed(token.to_string()),
        None => {
            tracing::debug!("no session token, redirecting to login");
            Gate::Redirect(Route::Login)
        }
    }
}

/// Errors from a session store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session storage unavailable")]
    Unavailable,

    #[error("Failed to read session: {0}")]
    Read(String),

    #[error("Failed to write session: {0}")]
    Write(String),
}

/// Persistent storage for the session
pub trait SessionStore {
    /// Load the stored session; a missing session is an empty one
    fn load(&self) -> Result<Session, StoreError>;

    /// Persist the session
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Forget the session (explicit logout only)
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and as a fallback when no storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: std::sync::Mutex<Session>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Session, StoreError> {
        self.inner
            .lock()
            .map(|s| s.clone())
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        *guard = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.save(&Session::default())
    }
}
