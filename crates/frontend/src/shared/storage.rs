//! Browser storage: the session lives in `sessionStorage`, UI preferences in
//! `localStorage`

use contracts::system::auth::session::SessionStore;
use web_sys::{window, Storage};

fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn session_get(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

/// `SessionStore` backed by `window.sessionStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        session_get(key)
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn get_pref(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_pref(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
