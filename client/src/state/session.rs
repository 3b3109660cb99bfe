//! Tab-scoped session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the navigation bar, and every page that needs the
//! signed-in identity. The session lives in `sessionStorage` under fixed keys
//! so it survives reloads within a tab but not a browser restart.
//!
//! DESIGN
//! ======
//! Storage access goes through [`SessionBackend`] so the store can be driven by
//! the browser in the WASM build and by an in-memory map in tests and during
//! the server render pass. [`SessionContext`] is the Leptos-provided handle;
//! it owns the store and a revision signal so same-tab writes re-render
//! session-aware chrome.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userid";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";
pub const ROLE_KEY: &str = "role";

const ALL_KEYS: [&str; 5] = [TOKEN_KEY, USER_ID_KEY, USERNAME_KEY, EMAIL_KEY, ROLE_KEY];

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse the backend's wire spelling (`USER` / `ADMIN`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Route a freshly signed-in user lands on.
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::User => "/student-dashboard",
            Self::Admin => "/admin-dashboard",
        }
    }
}

/// Snapshot of the stored identity. Every field is absent for anonymous users.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Key/value storage the session is persisted in.
pub trait SessionBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.sessionStorage`. Every operation is a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionBackend for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("sessionStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                if storage.remove_item(key).is_err() {
                    leptos::logging::warn!("sessionStorage remove failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Reads and writes the session fields under their fixed storage keys.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by `window.sessionStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserSessionStorage)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    /// Persist every field of `session` in one call. Absent fields are
    /// removed so no value from a previous identity survives.
    pub fn save(&self, session: &Session) {
        self.write(TOKEN_KEY, session.token.as_deref());
        self.write(USER_ID_KEY, session.user_id.as_deref());
        self.write(USERNAME_KEY, session.username.as_deref());
        self.write(EMAIL_KEY, session.email.as_deref());
        self.write(ROLE_KEY, session.role.map(Role::as_str));
    }

    fn write(&self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.backend.set_item(key, v),
            None => self.backend.remove_item(key),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get_item(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.backend.get_item(USER_ID_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.backend.get_item(USERNAME_KEY)
    }

    pub fn email(&self) -> Option<String> {
        self.backend.get_item(EMAIL_KEY)
    }

    /// Stored role; unrecognized values read as absent.
    pub fn role(&self) -> Option<Role> {
        self.backend.get_item(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn load(&self) -> Session {
        Session {
            token: self.token(),
            user_id: self.user_id(),
            username: self.username(),
            email: self.email(),
            role: self.role(),
        }
    }

    pub fn clear(&self) {
        for key in ALL_KEYS {
            self.backend.remove_item(key);
        }
    }
}

/// Session handle provided through Leptos context.
///
/// Created once in `App`; `sign_out` is the teardown path. Reads always go to
/// storage so a change from another tab is seen on the next render.
#[derive(Clone, Debug)]
pub struct SessionContext {
    store: SessionStore,
    revision: RwSignal<u64>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self { store, revision: RwSignal::new(0) }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Current session, tracked so same-tab writes re-run the caller.
    pub fn snapshot(&self) -> Session {
        self.revision.track();
        self.store.load()
    }

    /// Current session without subscribing.
    pub fn snapshot_untracked(&self) -> Session {
        self.store.load()
    }

    pub fn sign_in(&self, session: &Session) {
        self.store.save(session);
        self.bump();
    }

    pub fn sign_out(&self) {
        self.store.clear();
        self.bump();
    }

    fn bump(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }
}
