use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::serde_utils::{lenient_string, null_default};

/// Store user as returned by `GET /users` and `GET /users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    /// Kept as text; see [`User::role`]
    #[serde(default, deserialize_with = "null_default")]
    pub role_name: String,
    #[serde(default)]
    pub store_id: Option<String>,
    /// Logically deleted users are still returned by the list endpoint
    #[serde(default, deserialize_with = "null_default")]
    pub deleted: bool,
}

impl User {
    /// Unknown roles degrade to staff
    pub fn role(&self) -> UserRole {
        UserRole::from_code(&self.role_name).unwrap_or_default()
    }
}

/// Drops logically deleted users
pub fn active_users(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|u| !u.deleted).collect()
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

impl CreateUserDto {
    pub fn validate(&self) -> Vec<String> {
        if [&self.name, &self.email, &self.password, &self.role_name]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            vec!["Por favor, preencha todos os campos obrigatórios.".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Body of `PUT /users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub role_name: String,
    pub store_id: Option<String>,
}

impl UpdateUserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role_name: user.role_name.clone(),
            store_id: user.store_id.clone(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        if [&self.name, &self.email, &self.role_name]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            vec!["Por favor, preencha todos os campos obrigatórios.".to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_is_staff() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","name":"Ana","email":"a@x","role_name":"owner"}"#).unwrap();
        assert_eq!(user.role(), UserRole::Staff);
    }

    #[test]
    fn test_deleted_users_are_hidden() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":"1","role_name":"admin"},{"id":"2","role_name":"staff","deleted":true}]"#,
        )
        .unwrap();
        let active = active_users(users);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "1");
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":"1","name":null,"email":null,"role_name":"admin","deleted":null},{"id":2,"role_name":null}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert!(!users[0].deleted);
        assert_eq!(users[0].name, "");
        assert_eq!(users[1].id, "2");
        assert_eq!(users[1].role(), UserRole::Staff);
        assert_eq!(active_users(users).len(), 2);
    }

    #[test]
    fn test_create_requires_password() {
        let dto = CreateUserDto {
            name: "Ana".into(),
            email: "ana@loja.com".into(),
            role_name: "staff".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().len(), 1);
    }
}
