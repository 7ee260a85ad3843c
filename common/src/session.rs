//! Authentication session context.
//!
//! The session is an explicit value owned by the application root and passed
//! to whoever needs the identity or the bearer token. Persistence goes through
//! a [`SessionStorage`] so the browser build can keep it in `localStorage`
//! while tests use [`MemoryStorage`].

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::model::user::{User, UserPatch};

/// Key under which the session is persisted.
pub const STORAGE_KEY: &str = "auth-storage";

/// Persisted form of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Where a session survives page reloads.
pub trait SessionStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// In-process storage, used by tests and as a fallback when the browser
/// denies access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn with(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    fn save(&self, raw: &str) {
        *self.raw.borrow_mut() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

/// Who is using the dashboard, if anyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    state: StoredSession,
}

impl SessionContext {
    /// Restores the session saved by a previous page load.
    ///
    /// Missing or unreadable data yields an anonymous session.
    pub fn load(storage: &dyn SessionStorage) -> Self {
        let state = storage
            .load()
            .and_then(|raw| serde_json::from_str::<StoredSession>(&raw).ok())
            .unwrap_or_default();
        Self { state }
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    /// Token to send as `Authorization: Bearer`, when there is one.
    pub fn bearer(&self) -> Option<&str> {
        self.token().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn login(&mut self, user: User, token: String, storage: &dyn SessionStorage) {
        self.state = StoredSession {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        };
        self.persist(storage);
    }

    /// Keeps the credentials of a freshly created account without logging in;
    /// the account has to be confirmed first.
    pub fn register(&mut self, user: User, token: String, storage: &dyn SessionStorage) {
        self.state = StoredSession {
            user: Some(user),
            token: Some(token),
            is_authenticated: false,
        };
        self.persist(storage);
    }

    /// Marks a restored session as verified by `GET /auth/me`.
    pub fn confirm(&mut self, user: User, storage: &dyn SessionStorage) {
        self.state.user = Some(user);
        self.state.is_authenticated = true;
        self.persist(storage);
    }

    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        self.state = StoredSession::default();
        storage.clear();
    }

    pub fn update_user(&mut self, patch: UserPatch, storage: &dyn SessionStorage) {
        if let Some(user) = self.state.user.as_mut() {
            user.apply(patch);
            self.persist(storage);
        }
    }

    /// Replaces the whole user record, as returned by a profile update.
    pub fn replace_user(&mut self, user: User, storage: &dyn SessionStorage) {
        self.state.user = Some(user);
        self.persist(storage);
    }

    pub fn set_confirmed_token(&mut self, token: String, storage: &dyn SessionStorage) {
        if let Some(user) = self.state.user.as_mut() {
            user.confirmed_token = Some(token);
            self.persist(storage);
        }
    }

    fn persist(&self, storage: &dyn SessionStorage) {
        if let Ok(raw) = serde_json::to_string(&self.state) {
            storage.save(&raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 12,
            email: "agence@exemple.ma".into(),
            agency_name: "Atlas Immo".into(),
            language_id: Some(1),
            confirmed_token: None,
        }
    }

    #[test]
    fn login_is_restored_on_next_load() {
        let storage = MemoryStorage::default();
        let mut session = SessionContext::load(&storage);
        assert!(!session.is_authenticated());

        session.login(user(), "tok".into(), &storage);

        let restored = SessionContext::load(&storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.bearer(), Some("tok"));
        assert_eq!(restored.user().map(|u| u.id), Some(12));
    }

    #[test]
    fn register_keeps_token_but_not_authenticated() {
        let storage = MemoryStorage::default();
        let mut session = SessionContext::default();
        session.register(user(), "tok".into(), &storage);
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
    }

    #[test]
    fn logout_clears_storage() {
        let storage = MemoryStorage::default();
        let mut session = SessionContext::default();
        session.login(user(), "tok".into(), &storage);
        session.logout(&storage);
        assert_eq!(storage.raw(), None);
        assert_eq!(session, SessionContext::default());
    }

    #[test]
    fn corrupt_storage_is_anonymous() {
        let storage = MemoryStorage::with("{not json");
        let session = SessionContext::load(&storage);
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn profile_changes_are_persisted() {
        let storage = MemoryStorage::default();
        let mut session = SessionContext::default();
        session.login(user(), "tok".into(), &storage);
        session.update_user(
            UserPatch {
                language_id: Some(3),
                ..Default::default()
            },
            &storage,
        );
        session.set_confirmed_token("provider-token".into(), &storage);

        let restored = SessionContext::load(&storage);
        let u = restored.user().unwrap();
        assert_eq!(u.language_id, Some(3));
        assert_eq!(u.agency_name, "Atlas Immo");
        assert_eq!(u.confirmed_token.as_deref(), Some("provider-token"));
    }
}
