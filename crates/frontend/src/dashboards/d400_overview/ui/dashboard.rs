use crate::dashboards::d400_overview::api;
use crate::shared::chart::{stored_chart_kind, ChartCanvas, ChartData};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::format_brl;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::polling::use_polling;
use crate::shared::storage::set_pref;
use contracts::dashboards::d400_overview::dto::{fields, top_valued_cards, OverviewKpis, ValuedCard};
use contracts::shared::charting::{
    chart_series, detect_label_field, detect_value_field, pivot_by_month, ChartKind,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

const SALES_CHART_PREF: &str = "dashboard_chart_type";

const TOP_CARDS: usize = 3;

/// Sales rows carrying a product name become one dataset per product
fn sales_chart_data(rows: &[Value]) -> ChartData {
    let label_field = detect_label_field(rows, fields::SALES_LABEL);
    let series_field = rows.first().and_then(Value::as_object).and_then(|obj| {
        fields::SALES_SERIES
            .iter()
            .find(|c| obj.contains_key(**c))
            .map(|c| c.to_string())
    });

    match series_field {
        Some(series) if !series.eq_ignore_ascii_case(&label_field) => {
            let value_field = detect_value_field(rows, fields::SALES_VALUE);
            ChartData::from_pivot(pivot_by_month(rows, &label_field, &series, &value_field))
        }
        _ => ChartData::single(
            "Vendas (R$)",
            chart_series(rows, fields::SALES_LABEL, fields::SALES_VALUE),
        ),
    }
}

fn valued_card_line(rank: usize, card: &ValuedCard) -> (String, String, String, String) {
    (
        format!("#{}", rank),
        card.name().to_string(),
        format!("Média: {}", format_brl(card.avg_price())),
        format!("Venda: {} ({} unid.)", format_brl(card.current_price()), card.stock()),
    )
}

/// Overview: KPI tiles, sales/acquisition/aging charts and the most valued cards
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let kpis = RwSignal::new(None::<OverviewKpis>);
    let sales = RwSignal::new(Vec::<Value>::new());
    let acquisitions = RwSignal::new(Vec::<Value>::new());
    let aging = RwSignal::new(Vec::<Value>::new());
    let valued = RwSignal::new(Vec::<ValuedCard>::new());
    let (loading, set_loading) = signal(true);
    let sales_kind = RwSignal::new(stored_chart_kind(SALES_CHART_PREF, ChartKind::Bar));

    let load_kpis = move || {
        spawn_local(async move {
            match api::fetch_kpis().await {
                Ok(values) => kpis.set(Some(values)),
                Err(e) => {
                    log::error!("Falha ao atualizar indicadores: {}", e);
                    // Only the first load falls back to zeros
                    if kpis.with_untracked(Option::is_none) {
                        kpis.set(Some(OverviewKpis::default()));
                    }
                }
            }
        });
    };

    Effect::new(move |_| {
        load_kpis();
        spawn_local(async move {
            sales.set(api::fetch_sales_overview().await);
            acquisitions.set(api::fetch_monthly_acquisitions().await);
            aging.set(api::fetch_stock_aging().await);
            valued.set(top_valued_cards(api::fetch_valued_cards().await, TOP_CARDS));
            set_loading.set(false);
        });
    });

    use_polling(config().ui.dashboard_refresh_ms, load_kpis);

    let toggle_sales_kind = move |_| {
        let next = sales_kind.get_untracked().next();
        set_pref(SALES_CHART_PREF, next.code());
        sales_kind.set(next);
    };

    let sales_data = Signal::derive(move || sales.with(|rows| sales_chart_data(rows)));
    let acquisitions_data = Signal::derive(move || {
        acquisitions.with(|rows| {
            ChartData::single(
                "Aquisições (R$)",
                chart_series(rows, fields::ACQUISITIONS_LABEL, fields::ACQUISITIONS_VALUE),
            )
        })
    });
    let aging_data = Signal::derive(move || {
        aging.with(|rows| {
            ChartData::single(
                "Dias em Estoque",
                chart_series(rows, fields::AGING_LABEL, fields::AGING_VALUE),
            )
        })
    });

    let kpi_text = move |f: fn(&OverviewKpis) -> String| {
        Signal::derive(move || kpis.with(|k| k.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <Show when=move || loading.get()>
                    <span class="page__hint">"Carregando..."</span>
                </Show>
            </div>

            <div class="stat-grid">
                <StatCard label="Cartas em estoque" icon_name="package" value=kpi_text(OverviewKpis::cards_text) />
                <StatCard label="Booster boxes" icon_name="inventory" value=kpi_text(OverviewKpis::boosters_text) />
                <StatCard label="Pokémon com mais estoque" icon_name="activity" value=kpi_text(OverviewKpis::top_pokemon_text) />
                <StatCard label="Coleção com mais itens" icon_name="store" value=kpi_text(OverviewKpis::top_collection_text) />
            </div>

            <div class="dashboard-grid">
                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Vendas"</h3>
                        <button class="button button--ghost" on:click=toggle_sales_kind>
                            {icon("repeat")}
                            {move || sales_kind.get().display_name()}
                        </button>
                    </div>
                    <ChartCanvas kind=sales_kind data=sales_data />
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Aquisições mensais"</h3>
                    </div>
                    <ChartCanvas kind=Signal::stored(ChartKind::Pie) data=acquisitions_data />
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Tempo em estoque"</h3>
                    </div>
                    <ChartCanvas kind=Signal::stored(ChartKind::Line) data=aging_data />
                </section>

                <section class="dashboard-panel top-cards">
                    <div class="dashboard-panel__header">
                        <h3>"Top 3 Cartas Valiosas"</h3>
                    </div>
                    <Show
                        when=move || valued.with(|v| !v.is_empty())
                        fallback=|| view! { <p class="chart-box__empty">"Nenhuma carta encontrada."</p> }
                    >
                        <ul class="top-cards__list">
                            {move || {
                                valued
                                    .get()
                                    .iter()
                                    .enumerate()
                                    .map(|(i, card)| {
                                        let (rank, name, avg, sale) = valued_card_line(i + 1, card);
                                        view! {
                                            <li class="top-cards__item">
                                                <span class="top-cards__rank">{rank}</span>
                                                <span class="top-cards__name">{name}</span>
                                                <span class="top-cards__avg">{avg}</span>
                                                <span class="top-cards__price">{sale}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sales_with_product_names_pivot() {
        let rows = vec![
            json!({"month": "2025-01", "productName": "Pikachu", "totalRevenue": 10}),
            json!({"month": "2025-02", "productName": "Charizard", "totalRevenue": 30}),
            json!({"month": "2025-01", "productName": "Pikachu", "totalRevenue": 5}),
        ];
        let data = sales_chart_data(&rows);
        assert_eq!(data.labels, vec!["jan/25", "fev/25"]);
        assert_eq!(data.datasets.len(), 2);
        assert_eq!(data.datasets[0].label, "Pikachu");
        assert_eq!(data.datasets[0].values, vec![15.0, 0.0]);
        assert_eq!(data.datasets[1].values, vec![0.0, 30.0]);
    }

    #[test]
    fn test_sales_without_series_is_single_dataset() {
        let rows = vec![
            json!({"month": "2025-02-10", "sales": "7.5"}),
            json!({"month": "2025-01-03", "sales": 2}),
        ];
        let data = sales_chart_data(&rows);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].label, "Vendas (R$)");
        assert_eq!(data.labels, vec!["jan/25", "fev/25"]);
        assert_eq!(data.datasets[0].values, vec![2.0, 7.5]);
    }

    #[test]
    fn test_sales_by_product_only_is_not_pivoted() {
        let rows = vec![json!({"productName": "Mew", "value": 4})];
        let data = sales_chart_data(&rows);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.labels, vec!["Mew"]);
    }

    #[test]
    fn test_valued_card_line() {
        let card = ValuedCard {
            product_name: Some("Charizard".into()),
            avg_sale_price: Some(100.0),
            current_sale_price: Some(120.0),
            current_stock: Some(2.0),
        };
        let (rank, name, _, sale) = valued_card_line(1, &card);
        assert_eq!(rank, "#1");
        assert_eq!(name, "Charizard");
        assert!(sale.ends_with("(2 unid.)"));
    }
}
