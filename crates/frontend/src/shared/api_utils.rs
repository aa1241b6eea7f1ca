//! API utilities for frontend-backend communication
//!
//! Every call goes through [`request_json`]: JSON content type, the session
//! `user-id` header when a session exists, and a typed [`ApiError`].

use contracts::system::auth::session::USER_ID_KEY;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::shared::config::config;
use crate::shared::storage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Erro de rede: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Resposta inválida do servidor: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Build a full REST API URL from a path like `/products/42`
pub fn api_url(path: &str) -> String {
    config().api.url(path)
}

/// Best-effort message from an error body: `{"message": ...}` or `{"detail": ...}`,
/// then the raw text, then `HTTP <status>`
pub fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "detail", "error"].iter().find_map(|key| {
                v.get(key)
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.trim().is_empty())
                    .map(str::to_string)
            })
        });
    from_json
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Empty bodies decode as JSON `null`, so `()` and `Option<T>` accept them
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    match storage::session_get(USER_ID_KEY) {
        Some(user_id) => builder.header("user-id", &user_id),
        None => builder,
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http {
            status,
            message: error_message(status, &body),
        });
    }
    decode_body(&body)
}

/// Sends a JSON request and decodes the JSON answer
pub async fn request_json<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let builder = builder(method, url).header("Content-Type", "application/json");
    let request = match body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    request_json(Method::Get, url, None).await
}

pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    request_json(method, url, Some(body)).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    request_json::<serde_json::Value>(Method::Delete, url, None)
        .await
        .map(|_| ())
}

/// Read-only dashboard calls: failures are logged and yield an empty value
pub async fn request_json_or_default<T: DeserializeOwned + Default>(url: &str) -> T {
    match get_json::<Option<T>>(url).await {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            log::error!("Erro ao buscar dados da API ({}): {}", url, e);
            T::default()
        }
    }
}

/// Multipart upload; the browser sets the boundary header itself
pub async fn post_form<T: DeserializeOwned>(url: &str, form: FormData) -> Result<T, ApiError> {
    let request = builder(Method::Post, url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(
            error_message(400, r#"{"message":"Estoque insuficiente"}"#),
            "Estoque insuficiente"
        );
        assert_eq!(
            error_message(422, r#"{"detail":"raridade desconhecida"}"#),
            "raridade desconhecida"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(500, "Internal failure"), "Internal failure");
        assert_eq!(error_message(404, ""), "HTTP 404");
        assert_eq!(error_message(400, r#"{"message":""}"#), r#"{"message":""}"#);
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_body::<()>("").is_ok());
        let none: Option<Vec<i32>> = decode_body("  ").unwrap();
        assert!(none.is_none());
        let list: Vec<i32> = decode_body("[1,2]").unwrap();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_decode_invalid_body_is_parse_error() {
        let result: Result<Vec<i32>, ApiError> = decode_body("<html>");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_http_error_displays_message() {
        let err = ApiError::Http {
            status: 409,
            message: "CEP já cadastrado".to_string(),
        };
        assert_eq!(err.to_string(), "CEP já cadastrado");
        assert_eq!(err.status(), Some(409));
        assert_eq!(ApiError::Network("x".into()).status(), None);
    }
}
