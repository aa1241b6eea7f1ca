use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, HOME_TAB};
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the layout is created
    tabs_store.init_router_integration((HOME_TAB, tab_label_for_key(HOME_TAB)));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
