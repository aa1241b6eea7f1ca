use serde::{Deserialize, Serialize};

/// Role of a store user; gates which actions the UI offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl Default for UserRole {
    /// Unknown or missing roles are treated as the least privileged one
    fn default() -> Self {
        UserRole::Staff
    }
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Manager => "Gerente",
            UserRole::Staff => "Funcionário",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::Staff]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }
}
