//! Maps a tab key to its view; every tab key is listed here

use crate::dashboards::{AnalyticsDashboard, OverviewDashboard};
use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_product::ui::details::ProductRegistration;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_movement::ui::list::MovementsPage;
use crate::domain::a005_user::ui::list::UserList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d401_analytics" => view! { <AnalyticsDashboard /> }.into_any(),

        // Stock
        "a002_product" => view! { <ProductList /> }.into_any(),
        "a002_product_new" => view! {
            <ProductRegistration on_close=Callback::new(move |_| {
                tabs_store.close_tab(&key_for_close);
            }) />
        }
        .into_any(),
        "a003_inventory" => view! { <InventoryList /> }.into_any(),
        "a004_movement" => view! { <MovementsPage /> }.into_any(),

        // Administration
        "a001_store" => view! { <StoreList /> }.into_any(),
        "a005_user" => view! { <UserList /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Página não encontrada"</div> }.into_any()
        }
    }
}
