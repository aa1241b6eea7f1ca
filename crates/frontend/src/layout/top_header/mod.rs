//! Top bar: sidebar toggle, brand, current user and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.reset();
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Gestão de Cards"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                    <span class="top-header__role">
                        {move || auth_state.with(|s| s.role().display_name())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
