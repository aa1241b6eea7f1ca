use contracts::system::auth::session::{apply_login_result, clear_session, current_session, Session};
use contracts::system::auth::LoginResponse;

use crate::shared::api_utils::ApiError;
use crate::shared::storage::BrowserSession;

/// Save `session-id`, `user-id` and the raw answer to sessionStorage;
/// a failed login leaves sessionStorage as it was
pub fn save_login(result: Result<(LoginResponse, String), ApiError>) -> Result<Session, ApiError> {
    apply_login_result(&BrowserSession, result)
}

/// Session restored from sessionStorage, if both ids are present
pub fn load_session() -> Option<Session> {
    current_session(&BrowserSession)
}

/// Remove every session key
pub fn clear() {
    clear_session(&BrowserSession);
}
