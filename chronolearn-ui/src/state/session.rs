//! Session State
//!
//! The session lives in localStorage (`token`, `users_id`) so it survives
//! reloads, and in a signal so the nav bar re-renders on login/logout.
//! Pages read it from context instead of touching storage themselves.

use leptos::*;

use chronolearn::session::{Session, SessionStore, StoreError};

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "users_id";

/// [`SessionStore`] over the browser's localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Session, StoreError> {
        let storage = Self::storage()?;
        let read = |key: &str| {
            storage
                .get_item(key)
                .map_err(|e| StoreError::Read(format!("{:?}", e)))
        };
        Ok(Session {
            token: read(TOKEN_KEY)?,
            user_id: read(USER_ID_KEY)?,
        })
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let write = |key: &str, value: &Option<String>| match value {
            Some(v) => storage.set_item(key, v),
            None => storage.remove_item(key),
        };
        write(TOKEN_KEY, &session.token)
            .and_then(|_| write(USER_ID_KEY, &session.user_id))
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.save(&Session::default())
    }
}

/// Session handle shared through context
#[derive(Clone, Copy)]
pub struct SessionState {
    session: RwSignal<Session>,
    store: LocalStorageStore,
}

impl SessionState {
    /// Current session, tracked
    pub fn get(&self) -> Session {
        self.session.get()
    }

    /// Current session without subscribing (for one-off checks on mount)
    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Persist a fresh login
    pub fn login(&self, session: Session) {
        if let Err(e) = self.store.save(&session) {
            web_sys::console::error_1(&format!("Failed to store session: {}", e).into());
        }
        self.session.set(session);
    }

    /// Explicit logout: forget the token everywhere
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            web_sys::console::error_1(&format!("Failed to clear session: {}", e).into());
        }
        self.session.set(Session::default());
    }
}

/// Load the stored session and provide it to all components
pub fn provide_session() {
    let store = LocalStorageStore;
    let session = store.load().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to read session: {}", e).into());
        Session::default()
    });

    provide_context(SessionState {
        session: create_rw_signal(session),
        store,
    });
}

pub fn use_session() -> SessionState {
    expect_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let store = LocalStorageStore;
        store.save(&Session::new("abc", Some("7".into()))).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("abc"));
        assert_eq!(loaded.user_id.as_deref(), Some("7"));

        store.clear().unwrap();
        let cleared = store.load().unwrap();
        assert!(!cleared.is_authenticated());
        assert_eq!(cleared.user_id, None);
    }

    #[wasm_bindgen_test]
    fn test_missing_user_id_is_removed() {
        let store = LocalStorageStore;
        store.save(&Session::new("abc", Some("7".into()))).unwrap();
        store.save(&Session::new("def", None)).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("def"));
        assert_eq!(loaded.user_id, None);
        store.clear().unwrap();
    }
}
