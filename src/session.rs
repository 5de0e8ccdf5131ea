//! Session Storage
//!
//! Role-keyed session records persisted in client-side storage.
//! A role counts as signed in when its key holds any value; nothing is
//! validated beyond that.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// The three kinds of account that can sign in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Staff, Role::Admin];

    /// Storage key holding the serialized session record
    pub fn session_key(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Storage key holding the remember-me marker
    pub fn remember_key(self) -> &'static str {
        match self {
            Role::Patient => "rememberMe",
            Role::Staff => "rememberMeStaff",
            Role::Admin => "rememberMeAdmin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored {role} session is not valid: {source}")]
    Malformed {
        role: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize session record: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("client storage is unavailable")]
    Unavailable,
}

/// Key-value storage for session records.
///
/// Implementors only provide raw string access; the role-level operations
/// are shared.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove_item(&self, key: &str);

    /// Raw stored session for a role
    fn get(&self, role: Role) -> Option<String> {
        self.get_item(role.session_key())
    }

    fn is_authenticated(&self, role: Role) -> bool {
        self.get(role).is_some()
    }

    fn set<T: Serialize>(&self, role: Role, record: &T) -> Result<(), SessionError> {
        let json = serde_json::to_string(record).map_err(SessionError::Serialize)?;
        self.set_item(role.session_key(), &json)
    }

    /// Remove the session record and the remember-me marker
    fn clear(&self, role: Role) {
        self.remove_item(role.session_key());
        self.remove_item(role.remember_key());
    }

    fn set_remember(&self, role: Role, remember: bool) -> Result<(), SessionError> {
        if remember {
            self.set_item(role.remember_key(), "true")
        } else {
            self.remove_item(role.remember_key());
            Ok(())
        }
    }

    fn remembered(&self, role: Role) -> bool {
        self.get_item(role.remember_key()).is_some()
    }

    /// Parse the stored session for a role.
    /// `Ok(None)` when nothing is stored.
    fn load<T: DeserializeOwned>(&self, role: Role) -> Result<Option<T>, SessionError> {
        match self.get(role) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| SessionError::Malformed {
                    role: role.session_key(),
                    source,
                }),
        }
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| SessionError::Unavailable)
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffSession;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_per_role() {
        let keys: Vec<_> = Role::ALL
            .iter()
            .map(|r| (r.session_key(), r.remember_key()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("patient", "rememberMe"),
                ("staff", "rememberMeStaff"),
                ("admin", "rememberMeAdmin"),
            ]
        );
    }

    #[test]
    fn test_presence_is_authentication() {
        // Any stored value counts, even one that will not parse
        let store = MemoryStore::with(&[("admin", "not json")]);
        assert!(store.is_authenticated(Role::Admin));
        assert!(!store.is_authenticated(Role::Patient));
        assert!(!store.is_authenticated(Role::Staff));
    }

    #[test]
    fn test_set_and_load_round_trip() {
        let store = MemoryStore::default();
        let staff = StaffSession {
            staff_id: 7,
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            email: "ana@clinic.test".into(),
            role: Some("Nurse".into()),
            ..Default::default()
        };
        store.set(Role::Staff, &staff).unwrap();
        let loaded: Option<StaffSession> = store.load(Role::Staff).unwrap();
        assert_eq!(loaded, Some(staff));
    }

    #[test]
    fn test_load_absent_is_none() {
        let store = MemoryStore::default();
        let loaded: Option<StaffSession> = store.load(Role::Staff).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let store = MemoryStore::with(&[("staff", "{broken")]);
        let err = store.load::<StaffSession>(Role::Staff).unwrap_err();
        assert!(matches!(err, SessionError::Malformed { role: "staff", .. }));
    }

    #[test]
    fn test_clear_removes_session_and_remember_flag() {
        let store = MemoryStore::with(&[
            ("patient", "{}"),
            ("rememberMe", "true"),
            ("staff", "{}"),
        ]);
        store.clear(Role::Patient);
        assert!(!store.contains("patient"));
        assert!(!store.contains("rememberMe"));
        assert!(store.contains("staff"));
    }

    #[test]
    fn test_remember_flag() {
        let store = MemoryStore::default();
        store.set_remember(Role::Admin, true).unwrap();
        assert_eq!(store.get_item("rememberMeAdmin").as_deref(), Some("true"));
        assert!(store.remembered(Role::Admin));
        store.set_remember(Role::Admin, false).unwrap();
        assert!(!store.remembered(Role::Admin));
    }
}
