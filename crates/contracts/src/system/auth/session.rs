//! Session bookkeeping over a key/value store
//!
//! The browser keeps the session in `sessionStorage`; the frontend implements
//! [`SessionStore`] on top of it.

use super::LoginResponse;

pub const SESSION_ID_KEY: &str = "session-id";
pub const USER_ID_KEY: &str = "user-id";
pub const AUTH_RESPONSE_KEY: &str = "auth-response";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
}

/// Persists a successful login; `raw` is the response body as received
pub fn apply_login(store: &impl SessionStore, response: &LoginResponse, raw: &str) -> Session {
    store.set(SESSION_ID_KEY, &response.session_id);
    store.set(USER_ID_KEY, &response.user_id);
    store.set(AUTH_RESPONSE_KEY, raw);
    Session {
        session_id: response.session_id.clone(),
        user_id: response.user_id.clone(),
    }
}

/// Outcome of a login request; only a successful answer touches the store
pub fn apply_login_result<E>(
    store: &impl SessionStore,
    result: Result<(LoginResponse, String), E>,
) -> Result<Session, E> {
    let (response, raw) = result?;
    Ok(apply_login(store, &response, &raw))
}

pub fn current_session(store: &impl SessionStore) -> Option<Session> {
    let session_id = store.get(SESSION_ID_KEY).filter(|s| !s.is_empty())?;
    let user_id = store.get(USER_ID_KEY).filter(|s| !s.is_empty())?;
    Some(Session { session_id, user_id })
}

pub fn clear_session(store: &impl SessionStore) {
    for key in [SESSION_ID_KEY, USER_ID_KEY, AUTH_RESPONSE_KEY] {
        store.remove(key);
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore(pub RefCell<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_login_stores_ids() {
        let store = MemoryStore::default();
        let raw = r#"{"session_id":"s-1","user_id":"u-1"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let session = apply_login(&store, &response, raw);

        assert_eq!(session.user_id, "u-1");
        assert_eq!(store.get(SESSION_ID_KEY).as_deref(), Some("s-1"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u-1"));
        assert_eq!(current_session(&store), Some(session));
    }

    #[test]
    fn test_rejected_login_writes_nothing() {
        let store = MemoryStore::default();
        let result = apply_login_result(&store, Err::<(LoginResponse, String), _>("401 Unauthorized"));
        assert_eq!(result, Err("401 Unauthorized"));
        assert!(store.0.borrow().is_empty());
    }

    #[test]
    fn test_accepted_login_writes_all_keys() {
        let store = MemoryStore::default();
        let raw = r#"{"session_id":"s-9","user_id":"u-9"}"#.to_string();
        let response: LoginResponse = serde_json::from_str(&raw).unwrap();
        let session = apply_login_result::<&str>(&store, Ok((response, raw.clone()))).unwrap();

        assert_eq!(session.session_id, "s-9");
        assert_eq!(store.get(SESSION_ID_KEY).as_deref(), Some("s-9"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u-9"));
        assert_eq!(store.get(AUTH_RESPONSE_KEY), Some(raw));
    }

    #[test]
    fn test_no_session_without_both_ids() {
        let store = MemoryStore::default();
        assert_eq!(current_session(&store), None);
        store.set(SESSION_ID_KEY, "s-1");
        assert_eq!(current_session(&store), None);
    }

    #[test]
    fn test_clear_session_removes_everything() {
        let store = MemoryStore::default();
        store.set(SESSION_ID_KEY, "s-1");
        store.set(USER_ID_KEY, "u-1");
        store.set(AUTH_RESPONSE_KEY, "{}");
        store.set("stock_filters", "keep");
        clear_session(&store);
        assert_eq!(store.0.borrow().len(), 1);
        assert!(current_session(&store).is_none());
    }
}
