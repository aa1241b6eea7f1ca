use crate::domain::a002_product::api as product_api;
use crate::domain::a004_movement::api;
use crate::domain::a004_movement::ui::details::{MovementFormView, MovementFormViewModel};
use crate::shared::components::table::format_brl;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::polling::use_polling;
use crate::shared::request_guard::RequestGuard;
use crate::shared::toast::use_toast;
use contracts::domain::a002_product::Product;
use contracts::domain::a004_movement::{latest, MovementRecord};
use contracts::enums::MovementType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn price_label(movement_type: MovementType) -> &'static str {
    match movement_type {
        MovementType::In => "Preço Unitário (Compra): ",
        _ => "Preço Unitário (Venda): ",
    }
}

#[component]
fn MovementCard(record: MovementRecord) -> impl IntoView {
    let kind = record.movement_type;
    let status = record.status;
    let price = record.unit_price().zip(record.total_value());

    view! {
        <div class=format!("movement-card {}", record.card_class())>
            <div class="movement-header">
                <h4>{record.product_name.clone().unwrap_or_else(|| "Produto não encontrado".to_string())}</h4>
                <div class="movement-badges">
                    <span class=format!("movement-type-badge {}", kind.css_class())>{kind.display_name()}</span>
                    <span class=format!("movement-status-badge {}", status.css_class())>{status.display_name()}</span>
                </div>
            </div>
            <p><strong>"Quantidade Movimentada: "</strong>{record.display_quantity_signed()}</p>
            <p><strong>"Quantidade Atual: "</strong>{record.quantity_after.unwrap_or(0)}</p>
            {price.map(|(unit, total)| view! {
                <p><strong>{price_label(kind)}</strong>{format_brl(unit)}</p>
                <p class="movement-total"><strong>"Total: "</strong>{format_brl(total)}</p>
            })}
            <p class="movement-description">
                {record.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "Sem descrição".to_string())}
            </p>
            {record.error_message.clone().map(|msg| view! {
                <p class="movement-error"><strong>"Erro: "</strong>{msg}</p>
            })}
            <p><strong>"Responsável: "</strong>{record.user_name.clone().unwrap_or_else(|| "Desconhecido".to_string())}</p>
            <p class="movement-date"><strong>"Data: "</strong>{format_datetime_opt(record.timestamp.as_deref())}</p>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MovementsPage() -> impl IntoView {
    let toast = use_toast();
    let guard = StoredValue::new(RequestGuard::new());
    let (records, set_records) = signal::<Vec<MovementRecord>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loaded, set_loaded) = signal(false);
    let vm = MovementFormViewModel::new();

    let fetch = move || {
        let guard = guard.get_value();
        let ticket = guard.begin();
        spawn_local(async move {
            let result = api::fetch_audits().await;
            if !guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(v) => {
                    set_records.set(latest(v, config().ui.movements_limit));
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Erro ao carregar movimentações: {}", e);
                    toast.error(format!("Erro ao carregar movimentações: {}", e));
                }
            }
        });
    };

    spawn_local(async move {
        match product_api::fetch_products().await {
            Ok(v) => set_products.set(v),
            Err(e) => log::error!("Erro ao carregar produtos: {}", e),
        }
    });

    fetch();
    use_polling(config().ui.movements_refresh_ms, fetch);

    view! {
        <PageFrame page_id="a004_movement--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Movimentações"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <MovementFormView vm=vm products=products on_saved=Callback::new(move |_| fetch()) />

                <Show when=move || !loaded.get()>
                    <div class="loading-state"><Spinner /> " Carregando movimentações..."</div>
                </Show>
                <Show when=move || loaded.get() && records.with(|v| v.is_empty())>
                    <div class="empty-state">"Nenhuma movimentação registrada"</div>
                </Show>

                <div class="movements-grid">
                    <For
                        each=move || records.get().into_iter().enumerate()
                        key=|(i, r)| r.render_key(*i)
                        children=move |(_, record)| view! { <MovementCard record=record /> }
                    />
                </div>
            </div>
        </PageFrame>
    }
}
