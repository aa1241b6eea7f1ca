//! Client-side role gates of the user management screen
//!
//! These only decide which buttons render; the backend enforces the rules.

use super::aggregate::User;
use crate::enums::UserRole;

/// Permissions of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    pub role: UserRole,
    pub user_id: Option<String>,
}

impl Permissions {
    pub fn new(role: UserRole, user_id: Option<String>) -> Self {
        Self { role, user_id }
    }

    /// Staff only sees the list
    pub fn can_create(&self) -> bool {
        self.role != UserRole::Staff
    }

    pub fn can_edit(&self, target: &User) -> bool {
        match self.role {
            UserRole::Admin => true,
            UserRole::Manager => target.role() != UserRole::Admin,
            UserRole::Staff => false,
        }
    }

    pub fn can_delete(&self, target: &User) -> bool {
        match self.role {
            UserRole::Admin => self.user_id.as_deref() != Some(target.id.as_str()),
            UserRole::Manager => target.role() == UserRole::Staff,
            UserRole::Staff => false,
        }
    }

    pub fn can_assign(&self, role: UserRole) -> bool {
        match self.role {
            UserRole::Admin => true,
            UserRole::Manager => role != UserRole::Admin,
            UserRole::Staff => false,
        }
    }

    /// Roles offered by the role select
    pub fn assignable_roles(&self) -> Vec<UserRole> {
        UserRole::all()
            .into_iter()
            .filter(|r| self.can_assign(*r))
            .collect()
    }

    /// Error shown when the submitted role is not allowed
    pub fn check_assign(&self, role_code: &str) -> Result<(), String> {
        let role = UserRole::from_code(role_code).unwrap_or_default();
        if self.role == UserRole::Manager && role == UserRole::Admin {
            return Err("Gerentes não podem promover usuários a Administrador.".to_string());
        }
        if !self.can_assign(role) {
            return Err("Você não tem permissão para alterar usuários.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: &str) -> User {
        User {
            id: id.into(),
            role_name: role.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_admin_deletes_everyone_but_self() {
        let me = Permissions::new(UserRole::Admin, Some("a1".into()));
        assert!(me.can_edit(&user("a1", "admin")));
        assert!(!me.can_delete(&user("a1", "admin")));
        assert!(me.can_delete(&user("a2", "admin")));
        assert!(me.can_delete(&user("m1", "manager")));
    }

    #[test]
    fn test_manager_rules() {
        let me = Permissions::new(UserRole::Manager, Some("m1".into()));
        assert!(!me.can_edit(&user("a1", "admin")));
        assert!(me.can_edit(&user("m2", "manager")));
        assert!(!me.can_delete(&user("m2", "manager")));
        assert!(me.can_delete(&user("s1", "staff")));
        assert_eq!(
            me.check_assign("admin").unwrap_err(),
            "Gerentes não podem promover usuários a Administrador."
        );
        assert_eq!(me.assignable_roles(), vec![UserRole::Manager, UserRole::Staff]);
    }

    #[test]
    fn test_staff_is_read_only() {
        let me = Permissions::new(UserRole::Staff, Some("s1".into()));
        assert!(!me.can_create());
        assert!(!me.can_edit(&user("s1", "staff")));
        assert!(!me.can_delete(&user("s2", "staff")));
        assert!(me.assignable_roles().is_empty());
    }
}
