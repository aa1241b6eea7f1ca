use contracts::system::auth::{LoginRequest, CONNECTION_ERROR, INVALID_CREDENTIALS, MISSING_FIELDS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, HOME_TAB};
use crate::shared::api_utils::ApiError;
use crate::system::auth::context::{load_user, use_auth, AuthState};
use crate::system::auth::{api, storage};

/// Inline message for a failed login; HTTP errors mean wrong credentials
fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Http { .. } => INVALID_CREDENTIALS,
        ApiError::Network(_) | ApiError::Parse(_) => CONNECTION_ERROR,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if !request.is_complete() {
            set_error_message.set(Some(MISSING_FIELDS.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match storage::save_login(api::login(request.email, request.password).await) {
                Ok(session) => {
                    log::info!("Login ok for user {}", session.user_id);

                    set_auth_state.set(AuthState {
                        session: Some(session.clone()),
                        user: None,
                    });
                    load_user(session, set_auth_state);
                    ctx.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    set_error_message.set(Some(login_error_message(&e).to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gestão de Cards"</h1>
                <h2>"Acesso ao sistema"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="usuario@loja.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        let http = ApiError::Http {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert_eq!(login_error_message(&http), INVALID_CREDENTIALS);
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            CONNECTION_ERROR
        );
    }
}
