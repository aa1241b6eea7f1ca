use contracts::domain::a005_user::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils::{api_url, delete, get_json, send_json, ApiError, Method};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json(&api_url("/users")).await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, ApiError> {
    send_json(Method::Post, &api_url("/users"), dto).await
}

pub async fn update_user(id: &str, dto: &UpdateUserDto) -> Result<serde_json::Value, ApiError> {
    send_json(Method::Put, &api_url(&format!("/users/{}", id)), dto).await
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    delete(&api_url(&format!("/users/{}", id))).await
}
