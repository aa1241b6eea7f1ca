use contracts::domain::a005_user::{Permissions, User};
use contracts::enums::UserRole;
use contracts::system::auth::session::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Loaded after login; `None` until the user lookup finishes
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user_id.clone())
    }

    /// Unknown or unresolved users are treated as staff
    pub fn role(&self) -> UserRole {
        self.user.as_ref().map(User::role).unwrap_or_default()
    }

    pub fn permissions(&self) -> Permissions {
        Permissions::new(self.role(), self.user_id())
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Usuário".to_string())
    }
}

/// Looks up the user behind the session so role-gated UI can render
pub fn load_user(session: Session, set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        match api::get_current_user(&session.user_id).await {
            Ok(user) => set_auth_state.update(|s| s.user = Some(user)),
            Err(e) => log::warn!(
                "Não foi possível verificar suas permissões ({}). Assumindo perfil de funcionário.",
                e
            ),
        }
    });
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = storage::load_session();
    let (auth_state, set_auth_state) = signal(AuthState {
        session: session.clone(),
        user: None,
    });

    if let Some(session) = session {
        load_user(session, set_auth_state);
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Notify the server, then clear the session whatever it answered
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(session) = storage::load_session() {
        if let Err(e) = api::logout(session.session_id).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    storage::clear();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "u1".into(),
            name: "Ana".into(),
            email: "ana@loja.com".into(),
            role_name: role.into(),
            store_id: None,
            deleted: false,
        }
    }

    #[test]
    fn test_default_state_is_staff_and_anonymous() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), UserRole::Staff);
        assert_eq!(state.display_name(), "Usuário");
    }

    #[test]
    fn test_role_comes_from_loaded_user() {
        let state = AuthState {
            session: Some(Session {
                session_id: "s1".into(),
                user_id: "u1".into(),
            }),
            user: Some(user("manager")),
        };
        assert!(state.is_authenticated());
        assert_eq!(state.role(), UserRole::Manager);
        assert_eq!(state.permissions().user_id.as_deref(), Some("u1"));
        assert_eq!(state.display_name(), "Ana");
    }
}
