pub mod session;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Inline messages of the login form
pub const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos.";
pub const CONNECTION_ERROR: &str = "Erro ao conectar ao servidor.";
pub const MISSING_FIELDS: &str = "Preencha e-mail e senha.";
