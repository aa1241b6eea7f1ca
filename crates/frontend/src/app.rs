use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and sidebar state for the whole app
    provide_context(AppGlobalContext::new());

    // Transient notifications
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}
