pub mod state;

use self::state::create_state;
use crate::domain::a001_store::api as store_api;
use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::edit::{ProductEditDialog, ProductEditViewModel};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::modal::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::format_brl;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_guard::RequestGuard;
use crate::shared::toast::use_toast;
use contracts::domain::a001_store::Store;
use contracts::domain::a002_product::{apply_filters, store_names, PriceBand, Product};
use contracts::domain::a003_inventory::StockFilter;
use contracts::enums::{CardCondition, ProductType};
use contracts::shared::pagination::{count_text, Pagination};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

/// Multi-line text of the info toast
fn product_info(product: &Product) -> String {
    let mut lines = vec![
        product.name.clone(),
        format!("Categoria: {}", product.effective_type().display_name()),
        format!("Preço: {}", format_brl(product.price)),
        format!("Estoque: {} unidades", product.stock_quantity()),
    ];
    if let Some(d) = product.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Descrição: {}", d));
    }
    lines.join("\n")
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let toast = use_toast();
    let state = create_state();
    let guard = StoredValue::new(RequestGuard::new());

    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (stores, set_stores) = signal::<Vec<Store>>(Vec::new());
    let (loading, set_loading) = signal(false);

    let edit_vm = ProductEditViewModel::new();
    let edit_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Product>);
    let bulk_open = RwSignal::new(false);

    let fetch = move || {
        let guard = guard.get_value();
        let ticket = guard.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_products().await;
            if !guard.is_current(ticket) {
                log::debug!("Stale product list response dropped");
                return;
            }
            match result {
                Ok(v) => set_items.set(v),
                Err(e) => {
                    log::error!("Erro ao carregar produtos: {}", e);
                    toast.error("Erro ao carregar produtos");
                }
            }
            set_loading.set(false);
        });
    };

    let fetch_stores = move || {
        spawn_local(async move {
            match store_api::fetch_stores().await {
                Ok(v) => set_stores.set(v),
                Err(e) => log::error!("Erro ao carregar lojas: {}", e),
            }
        });
    };

    let filtered = Memo::new(move |_| {
        let filter = state.filter.get();
        items.with(|v| apply_filters(v, &filter))
    });

    let pagination = Signal::derive(move || {
        Pagination::new(state.page.get(), config().ui.items_per_page, filtered.with(|v| v.len()))
    });

    let page_items = Memo::new(move |_| {
        let p = pagination.get();
        filtered.with(|v| p.slice(v).to_vec())
    });

    let visible_ids =
        Signal::derive(move || page_items.with(|v| v.iter().map(|p| p.id.clone()).collect::<Vec<_>>()));

    let store_options = Memo::new(move |_| items.with(|v| store_names(v)));

    let toggle_select = move |id: String, checked: bool| {
        state.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let open_edit = move |product: Product| {
        edit_vm.load(&product);
        edit_open.set(true);
    };

    let on_edit_saved = Callback::new(move |_| {
        edit_open.set(false);
        fetch();
    });

    let open_delete = move |product: Product| {
        delete_target.set(Some(product));
        delete_open.set(true);
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(product) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => {
                    toast.success("Produto excluído com sucesso");
                    fetch();
                }
                Err(e) => {
                    log::error!("Erro ao excluir produto: {}", e);
                    toast.error("Erro ao excluir produto");
                }
            }
        });
    });

    let confirm_bulk_delete = Callback::new(move |_| {
        let ids: Vec<String> = state.selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        spawn_local(async move {
            let failed = api::delete_products(&ids).await;
            if failed == 0 {
                toast.success(format!("{} produto(s) excluído(s) com sucesso", ids.len()));
            } else {
                toast.error("Erro ao excluir produtos");
            }
            state.selected.set(HashSet::new());
            fetch();
        });
    });

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map(|p| format!("Tem certeza que deseja excluir o produto \"{}\"?", p.name))
            .unwrap_or_default()
    });
    let bulk_message = Signal::derive(move || {
        format!(
            "Tem certeza que deseja excluir {} produto(s) selecionado(s)?",
            state.selected.get().len()
        )
    });

    fetch();
    fetch_stores();

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestão de Estoque"</h1>
                    <span class="page__subtitle">{move || count_text(filtered.with(|v| v.len()))}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab("a002_product_new", tab_label_for_key("a002_product_new"))
                    >
                        {icon("plus")}
                        " Novo produto"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| bulk_open.set(true)
                        disabled=Signal::derive(move || state.selected.get().is_empty())
                    >
                        {icon("trash")}
                        {move || format!(" Excluir ({})", state.selected.get().len())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <SearchInput
                            value=Signal::derive(move || state.filter.get().search)
                            on_change=Callback::new(move |s: String| state.update_filter(|f| f.search = s))
                        />
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| state.toggle_filters()>
                            {icon("chevron-down")}
                            " Filtros"
                        </Button>
                        <Show when=move || !state.filter.get().is_empty()>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update_filter(|f| *f = f.clear_keep_search())
                            >
                                "Limpar filtros"
                            </Button>
                        </Show>
                    </div>

                    <Show when=move || state.filters_open.get()>
                        <div class="filter-panel-content">
                            <select
                                class="form__select"
                                prop:value=move || state.filter.get().category.map(|c| c.code()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = ProductType::from_code(&event_target_value(&ev));
                                    state.update_filter(|f| f.category = v);
                                }
                            >
                                <option value="">"Todas as categorias"</option>
                                {ProductType::all().into_iter().map(|t| view! {
                                    <option value=t.code()>{t.display_name()}</option>
                                }).collect_view()}
                            </select>

                            <select
                                class="form__select"
                                prop:value=move || state.filter.get().condition.map(|c| c.code()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = CardCondition::from_code(&event_target_value(&ev));
                                    state.update_filter(|f| f.condition = v);
                                }
                            >
                                <option value="">"Todas as condições"</option>
                                {CardCondition::all().into_iter().map(|c| view! {
                                    <option value=c.code()>{c.display_name()}</option>
                                }).collect_view()}
                            </select>

                            <select
                                class="form__select"
                                prop:value=move || state.filter.get().store.unwrap_or_default()
                                on:change=move |ev| {
                                    let v = Some(event_target_value(&ev)).filter(|s| !s.is_empty());
                                    state.update_filter(|f| f.store = v);
                                }
                            >
                                <option value="">"Todas as lojas"</option>
                                {move || store_options.get().into_iter().map(|name| view! {
                                    <option value=name.clone()>{name.clone()}</option>
                                }).collect_view()}
                            </select>

                            <select
                                class="form__select"
                                prop:value=move || state.filter.get().price.map(|b| b.key()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = PriceBand::from_key(&event_target_value(&ev));
                                    state.update_filter(|f| f.price = v);
                                }
                            >
                                <option value="">"Todos os preços"</option>
                                {PriceBand::all().into_iter().map(|b| view! {
                                    <option value=b.key()>{b.display_name()}</option>
                                }).collect_view()}
                            </select>

                            <select
                                class="form__select"
                                prop:value=move || state.filter.get().stock.map(|s| s.key()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = StockFilter::from_key(&event_target_value(&ev));
                                    state.update_filter(|f| f.stock = v);
                                }
                            >
                                <option value="">"Todo o estoque"</option>
                                {StockFilter::all().into_iter().map(|s| view! {
                                    <option value=s.key()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </Show>
                </div>

                <Show when=move || loading.get() && items.with(|v| v.is_empty())>
                    <div class="loading-state"><Spinner /> " Carregando produtos..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    visible_ids=visible_ids
                                    selected=state.selected
                                    on_change=Callback::new(move |check_all: bool| {
                                        if check_all {
                                            let ids = visible_ids.get_untracked();
                                            state.selected.update(|s| s.extend(ids));
                                        } else {
                                            state.selected.set(HashSet::new());
                                        }
                                    })
                                />
                                <TableHeaderCell>"Produto"</TableHeaderCell>
                                <TableHeaderCell>"Categoria"</TableHeaderCell>
                                <TableHeaderCell>"Condição"</TableHeaderCell>
                                <TableHeaderCell>"Loja"</TableHeaderCell>
                                <TableHeaderCell>"Preço"</TableHeaderCell>
                                <TableHeaderCell>"Estoque"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|p| p.id.clone()
                                children=move |product: Product| {
                                    let id = product.id.clone();
                                    let id_for_checkbox = id.clone();
                                    let id_for_selected = id.clone();
                                    let name = product.name.clone();
                                    let kind = product.effective_type();
                                    let level = product.stock_level(&state.filter.get_untracked().thresholds);
                                    let for_info = product.clone();
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    let card_code = product.card_code().map(|code| code.to_string());
                                    let condition = product.condition.display_name();
                                    let store_name = product.store_name.clone().unwrap_or_else(|| "N/A".to_string());
                                    let price = format_brl(product.price);
                                    let stock_quantity = product.stock_quantity();
                                    view! {
                                        <TableRow class:table__row--selected=move || state.selected.get().contains(&id_for_selected)>
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.selected.get().contains(&id_for_checkbox))
                                                on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || highlight_matches(&name, &state.filter.get().search)}
                                                    {card_code.map(|code| view! {
                                                        <span class="product-code">" · " {code}</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=format!("product-type-badge {}", kind.css_class())>{kind.display_name()}</span>
                                            </TableCell>
                                            <TableCell>{condition}</TableCell>
                                            <TableCell>{store_name}</TableCell>
                                            <TableCell>{price}</TableCell>
                                            <TableCell>
                                                <span class=format!("stock-badge {}", level.css_class())>{level.label()}</span>
                                                <span class="stock-quantity">{stock_quantity}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <button class="action-btn info" title="Informações" on:click=move |_| toast.info(product_info(&for_info))>
                                                        {icon("info")}
                                                    </button>
                                                    <button class="action-btn edit" title="Editar" on:click=move |_| open_edit(for_edit.clone())>
                                                        {icon("edit")}
                                                    </button>
                                                    <button class="action-btn delete" title="Excluir" on:click=move |_| open_delete(for_delete.clone())>
                                                        {icon("trash")}
                                                    </button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && filtered.with(|v| v.is_empty())>
                        <div class="empty-state">"Nenhum produto encontrado"</div>
                    </Show>
                </div>

                <PaginationControls
                    pagination=pagination
                    on_page_change=Callback::new(move |page| state.go_to_page(page))
                />
            </div>

            <ProductEditDialog open=edit_open vm=edit_vm stores=stores on_saved=on_edit_saved />
            <ConfirmDialog
                open=delete_open
                title="Excluir produto"
                message=delete_message
                on_confirm=confirm_delete
            />
            <ConfirmDialog
                open=bulk_open
                title="Excluir produtos"
                message=bulk_message
                on_confirm=confirm_bulk_delete
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_info_lines() {
        let product = Product {
            id: "p1".into(),
            name: "Pikachu".into(),
            description: Some("Holo".into()),
            price: 12.5,
            condition: CardCondition::Mint,
            store_id: None,
            store_name: None,
            card: None,
            other_product: None,
            stock: Some(3),
            product_type: Some("CARD".into()),
        };
        assert_eq!(
            product_info(&product),
            "Pikachu\nCategoria: Carta\nPreço: R$ 12,50\nEstoque: 3 unidades\nDescrição: Holo"
        );
    }
}
