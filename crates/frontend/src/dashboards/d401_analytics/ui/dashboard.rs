use crate::dashboards::d401_analytics::api;
use crate::shared::chart::{stored_chart_kind, ChartCanvas, ChartData, Dataset};
use crate::shared::components::table::format_number_int;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::request_guard::RequestGuard;
use crate::shared::storage::set_pref;
use chrono::NaiveDate;
use contracts::dashboards::d401_analytics::dto::{
    category_label, month_axis_label, CardSalesRow, DateRange, DistributionRow, ProfitRow,
    SpendEarnRow, ValuationRow,
};
use contracts::shared::charting::ChartKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

const PROFIT_CHART_PREF: &str = "dashboard_profit_chart_type";

const SPENT_COLOR: &str = "#ef4444";
const EARNED_COLOR: &str = "#22c55e";
const VALUATION_COLOR: &str = "#3b82f6";

/// Refetches `rows` whenever `key` changes; late answers to older keys are dropped
fn load_on_change<K, T, F, Fut>(key: RwSignal<K>, rows: RwSignal<Vec<T>>, fetch: F)
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Vec<T>> + 'static,
{
    let guard = RequestGuard::new();
    Effect::new(move |_| {
        let ticket = guard.begin();
        let guard = guard.clone();
        let pending = fetch(key.get());
        spawn_local(async move {
            let result = pending.await;
            if guard.is_current(ticket) {
                rows.set(result);
            }
        });
    });
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn distribution_chart(rows: &[DistributionRow]) -> ChartData {
    ChartData {
        labels: rows.iter().map(|r| category_label(r.category.as_deref())).collect(),
        datasets: vec![Dataset::new(
            "Quantidade",
            rows.iter().map(|r| r.total_quantity).collect(),
        )],
    }
}

fn profit_chart(rows: &[ProfitRow]) -> ChartData {
    ChartData {
        labels: rows.iter().map(|r| category_label(r.category.as_deref())).collect(),
        datasets: vec![Dataset::new(
            "Lucro (R$)",
            rows.iter().map(ProfitRow::value).collect(),
        )],
    }
}

/// Spending as bars on the left axis, earnings as a line on the right one
fn spend_earn_chart(rows: &[SpendEarnRow]) -> ChartData {
    ChartData {
        labels: rows
            .iter()
            .map(|r| month_axis_label(r.month_year.as_deref()))
            .collect(),
        datasets: vec![
            Dataset::new("Gastos", rows.iter().map(|r| r.total_spent).collect())
                .with_color(SPENT_COLOR),
            Dataset::new("Ganhos", rows.iter().map(|r| r.total_earned).collect())
                .with_color(EARNED_COLOR)
                .with_kind(ChartKind::Line)
                .on_secondary_axis(),
        ],
    }
}

fn valuation_chart(rows: &[ValuationRow]) -> ChartData {
    ChartData {
        labels: rows.iter().map(|r| month_axis_label(r.month.as_deref())).collect(),
        datasets: vec![Dataset::new(
            "Valor estimado do estoque (R$)",
            rows.iter().map(|r| r.total_stock_value).collect(),
        )
        .with_color(VALUATION_COLOR)],
    }
}

#[component]
fn RangeInputs(range: RwSignal<DateRange>) -> impl IntoView {
    let set_start = move |ev| {
        if let Some(start) = parse_date(&event_target_value(&ev)) {
            range.update(|r| *r = DateRange::new(start, r.end));
        }
    };
    let set_end = move |ev| {
        if let Some(end) = parse_date(&event_target_value(&ev)) {
            range.update(|r| *r = DateRange::new(r.start, end));
        }
    };

    view! {
        <div class="date-range">
            <label>
                "De "
                <input
                    type="date"
                    prop:value=move || range.get().start.format("%Y-%m-%d").to_string()
                    on:change=set_start
                />
            </label>
            <label>
                "Até "
                <input
                    type="date"
                    prop:value=move || range.get().end.format("%Y-%m-%d").to_string()
                    on:change=set_end
                />
            </label>
        </div>
    }
}

/// Analytics: stock distribution, best sellers, profit, spend vs earn and valuation
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let distribution_date = RwSignal::new(today_iso());
    let distribution = RwSignal::new(Vec::<DistributionRow>::new());
    load_on_change(distribution_date, distribution, |date: String| async move {
        api::fetch_distribution(&date).await
    });

    let sales_range = RwSignal::new(DateRange::default());
    let sales = RwSignal::new(Vec::<CardSalesRow>::new());
    load_on_change(sales_range, sales, api::fetch_card_sales);

    let profit_range = RwSignal::new(DateRange::default());
    let profit = RwSignal::new(Vec::<ProfitRow>::new());
    load_on_change(profit_range, profit, api::fetch_profit);
    let profit_kind = RwSignal::new(stored_chart_kind(PROFIT_CHART_PREF, ChartKind::Pie));

    let spend_earn_range = RwSignal::new(DateRange::default());
    let spend_earn = RwSignal::new(Vec::<SpendEarnRow>::new());
    load_on_change(spend_earn_range, spend_earn, api::fetch_spend_earn);

    let valuation_range = RwSignal::new(DateRange::default());
    let valuation = RwSignal::new(Vec::<ValuationRow>::new());
    load_on_change(valuation_range, valuation, api::fetch_valuation);

    let toggle_profit_kind = move |_| {
        let next = profit_kind.get_untracked().next();
        set_pref(PROFIT_CHART_PREF, next.code());
        profit_kind.set(next);
    };

    view! {
        <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("activity")}
                    <h1 class="page__title">"Análises"</h1>
                </div>
            </div>

            <div class="dashboard-grid">
                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Distribuição do estoque"</h3>
                        <div class="date-range">
                            <input
                                type="date"
                                prop:value=move || distribution_date.get()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if parse_date(&value).is_some() {
                                        distribution_date.set(value);
                                    }
                                }
                            />
                            <button class="button button--ghost" on:click=move |_| distribution_date.set(today_iso())>
                                "Hoje"
                            </button>
                        </div>
                    </div>
                    <ChartCanvas
                        kind=Signal::stored(ChartKind::Doughnut)
                        data=Signal::derive(move || distribution.with(|rows| distribution_chart(rows)))
                        empty_text="Nenhum dado de distribuição para a data."
                    />
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Cartas mais vendidas"</h3>
                        <RangeInputs range=sales_range />
                    </div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Produto"</TableHeaderCell>
                                <TableHeaderCell>"Quantidade vendida"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                sales
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <TableRow>
                                                <TableCell>{row.product_name.unwrap_or_else(|| "---".to_string())}</TableCell>
                                                <TableCell>{format_number_int(row.total_sold)}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || sales.with(|v| v.is_empty())>
                        <div class="empty-state">"Nenhuma venda encontrada."</div>
                    </Show>
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Lucro por categoria"</h3>
                        <RangeInputs range=profit_range />
                        <button class="button button--ghost" on:click=toggle_profit_kind>
                            {icon("repeat")}
                            {move || profit_kind.get().display_name()}
                        </button>
                    </div>
                    <ChartCanvas
                        kind=profit_kind
                        data=Signal::derive(move || profit.with(|rows| profit_chart(rows)))
                        height=420
                    />
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Gastos x Ganhos"</h3>
                        <RangeInputs range=spend_earn_range />
                    </div>
                    <ChartCanvas
                        kind=Signal::stored(ChartKind::Bar)
                        data=Signal::derive(move || spend_earn.with(|rows| spend_earn_chart(rows)))
                    />
                </section>

                <section class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>"Valorização do estoque"</h3>
                        <RangeInputs range=valuation_range />
                    </div>
                    <ChartCanvas
                        kind=Signal::stored(ChartKind::Line)
                        data=Signal::derive(move || valuation.with(|rows| valuation_chart(rows)))
                    />
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_uses_category_names() {
        let rows = vec![
            DistributionRow {
                category: Some("BOOSTER_BOX".into()),
                total_quantity: 4.0,
            },
            DistributionRow {
                category: None,
                total_quantity: 1.0,
            },
        ];
        let data = distribution_chart(&rows);
        assert_eq!(data.labels, vec!["Booster Box", "Desconhecido"]);
        assert_eq!(data.datasets[0].values, vec![4.0, 1.0]);
    }

    #[test]
    fn test_spend_earn_layout() {
        let rows = vec![SpendEarnRow {
            month_year: Some("2025-03".into()),
            total_spent: 100.0,
            total_earned: 250.0,
        }];
        let data = spend_earn_chart(&rows);
        assert_eq!(data.labels, vec!["mar/25"]);
        assert_eq!(data.datasets[0].color.as_deref(), Some(SPENT_COLOR));
        assert!(!data.datasets[0].secondary_axis);
        assert_eq!(data.datasets[1].kind, Some(ChartKind::Line));
        assert!(data.datasets[1].secondary_axis);
    }

    #[test]
    fn test_profit_falls_back_to_quantity() {
        let rows = vec![ProfitRow {
            category: Some("OUTROS".into()),
            total_profit: None,
            total_quantity: Some(6.0),
        }];
        let data = profit_chart(&rows);
        assert_eq!(data.labels, vec!["Outros"]);
        assert_eq!(data.datasets[0].values, vec![6.0]);
    }

    #[test]
    fn test_empty_rows_give_empty_charts() {
        assert!(valuation_chart(&[]).is_empty());
        assert!(spend_earn_chart(&[]).is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-02-28"), NaiveDate::from_ymd_opt(2025, 2, 28));
        assert_eq!(parse_date(""), None);
    }
}
