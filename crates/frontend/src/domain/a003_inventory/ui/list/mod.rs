use crate::domain::a003_inventory::api;
use crate::shared::components::stat_card::{StatCard, StatStatus};
use crate::shared::components::table::format_brl;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a003_inventory::{InventoryItem, InventorySummary};
use contracts::enums::{CardCondition, ProductType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Known codes get their pt-BR label, unknown ones are shown as sent
fn type_label(raw: Option<&str>) -> String {
    match raw {
        Some(code) => ProductType::from_code(code)
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| code.to_string()),
        None => "N/A".to_string(),
    }
}

fn condition_label(raw: Option<&str>) -> String {
    match raw {
        Some(code) => CardCondition::from_code(code)
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| code.to_string()),
        None => "N/A".to_string(),
    }
}

#[component]
fn InventoryCard(item: InventoryItem) -> impl IntoView {
    let level = item.stock_level(&config().stock.inventory);
    view! {
        <div class="inventory-card">
            <div class="inventory-card-header">
                <h3>{item.display_name().to_string()}</h3>
                <span class=format!("stock-status {}", level.css_class())>{level.label()}</span>
            </div>
            <div class="inventory-info">
                <p><strong>"Quantidade: "</strong>{item.quantity}</p>
                <p><strong>"Loja: "</strong>{item.store_name.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                <p><strong>"Tipo: "</strong>{type_label(item.product_type.as_deref())}</p>
                <p><strong>"Condição: "</strong>{condition_label(item.condition.as_deref())}</p>
                <p><strong>"Preço unitário: "</strong>{format_brl(item.sell_unit_price.unwrap_or(0.0))}</p>
                <p class="total-value"><strong>"Valor total: "</strong>{format_brl(item.value())}</p>
            </div>
            <div class="inventory-footer">
                <small>"Última atualização: " {format_datetime_opt(item.last_update())}</small>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<InventoryItem>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_inventory().await {
                Ok(v) => {
                    set_items.set(v);
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Erro ao carregar inventário: {}", e);
                    toast.error(format!("Erro ao carregar inventário: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    let summary = Memo::new(move |_| {
        items.with(|v| InventorySummary::from_items(v, &config().stock.inventory))
    });
    let tile = move |f: fn(&InventorySummary) -> String| {
        Signal::derive(move || loaded.get().then(|| f(&summary.get())))
    };

    fetch();

    view! {
        <PageFrame page_id="a003_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventário"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="inventory-stats">
                    <StatCard
                        label="Produtos Cadastrados"
                        icon_name="package"
                        value=tile(|s| s.total_items.to_string())
                    />
                    <StatCard
                        label="Unidades Total"
                        icon_name="inventory"
                        value=tile(|s| s.total_quantity.to_string())
                    />
                    <StatCard
                        label="Estoque Baixo"
                        icon_name="alert-triangle"
                        value=tile(|s| s.low_stock.to_string())
                        status=StatStatus::Warning
                    />
                    <StatCard
                        label="Sem Estoque"
                        icon_name="alert-circle"
                        value=tile(|s| s.out_of_stock.to_string())
                        status=StatStatus::Bad
                    />
                </div>

                <Show when=move || loading.get() && !loaded.get()>
                    <div class="loading-state"><Spinner /> " Carregando inventário..."</div>
                </Show>
                <Show when=move || loaded.get() && items.with(|v| v.is_empty())>
                    <div class="empty-state">"Nenhum item no inventário"</div>
                </Show>

                <div class="inventory-grid">
                    <For
                        each=move || items.get().into_iter().enumerate()
                        key=|(i, item)| item.id.clone().unwrap_or_else(|| i.to_string())
                        children=move |(_, item)| view! { <InventoryCard item=item /> }
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_translate_known_codes() {
        assert_eq!(type_label(Some("OTHER_PRODUCT")), "Outro Produto");
        assert_eq!(type_label(Some("FIGURE")), "FIGURE");
        assert_eq!(type_label(None), "N/A");
        assert_eq!(condition_label(Some("NEAR_MINT")), "Quase Perfeito");
        assert_eq!(condition_label(None), "N/A");
    }
}
