use contracts::domain::a005_user::User;
use contracts::system::auth::{LoginRequest, LoginResponse, LogoutRequest};

use crate::shared::api_utils::{api_url, get_json, request_json, send_json, ApiError, Method};

/// Login with e-mail and password; also returns the raw JSON answer,
/// which is kept in session storage as `auth-response`
pub async fn login(email: String, password: String) -> Result<(LoginResponse, String), ApiError> {
    let request = LoginRequest { email, password };
    let body = serde_json::to_value(&request).map_err(|e| ApiError::Parse(e.to_string()))?;
    let raw: serde_json::Value = request_json(Method::Post, &api_url("/auth/login"), Some(body)).await?;
    let response: LoginResponse =
        serde_json::from_value(raw.clone()).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok((response, raw.to_string()))
}

/// Best-effort: the session is cleared locally whatever the server answers
pub async fn logout(session_id: String) -> Result<(), ApiError> {
    send_json::<_, serde_json::Value>(
        Method::Post,
        &api_url("/auth/logout"),
        &LogoutRequest { session_id },
    )
    .await
    .map(|_| ())
}

/// Logged-in user, for the role that gates the UI
pub async fn get_current_user(user_id: &str) -> Result<User, ApiError> {
    get_json(&api_url(&format!("/users/{}", user_id))).await
}
