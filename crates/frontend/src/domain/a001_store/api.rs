use contracts::domain::a001_store::{sanitize_cep, Store, StoreDto};

use crate::shared::api_utils::{api_url, delete, get_json, send_json, ApiError, Method};

pub async fn fetch_stores() -> Result<Vec<Store>, ApiError> {
    get_json(&api_url("/stores")).await
}

pub async fn fetch_store(id: &str) -> Result<Store, ApiError> {
    get_json(&api_url(&format!("/stores/{}", id))).await
}

/// Creates the store when `id` is `None`, updates it otherwise.
/// The CEP is sent as bare digits.
pub async fn save_store(id: Option<&str>, dto: &StoreDto) -> Result<(), ApiError> {
    let body = StoreDto {
        cep: sanitize_cep(&dto.cep),
        ..dto.clone()
    };
    let (method, url) = match id {
        Some(id) => (Method::Put, api_url(&format!("/stores/{}", id))),
        None => (Method::Post, api_url("/stores")),
    };
    send_json::<_, serde_json::Value>(method, &url, &body).await.map(|_| ())
}

pub async fn delete_store(id: &str) -> Result<(), ApiError> {
    delete(&api_url(&format!("/stores/{}", id))).await
}
