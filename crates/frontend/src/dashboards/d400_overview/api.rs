use contracts::dashboards::d400_overview::dto::{
    OverviewKpis, TopCollection, TopPokemon, TotalBoosterBoxes, TotalCardsInStock, ValuedCard,
};
use serde_json::Value;

use crate::shared::api_utils::{get_json, request_json_or_default, ApiError};
use crate::shared::config::config;
use serde::de::DeserializeOwned;

fn dashboard_url(path: &str) -> String {
    config().api.dashboard(path)
}

/// An empty body counts as the default payload
async fn fetch_kpi<T: DeserializeOwned + Default>(path: &str) -> Result<T, ApiError> {
    get_json::<Option<T>>(&dashboard_url(path))
        .await
        .map(Option::unwrap_or_default)
}

/// The four KPI tiles; fails as a whole so a refresh never blanks good values
pub async fn fetch_kpis() -> Result<OverviewKpis, ApiError> {
    let total_cards: TotalCardsInStock = fetch_kpi("/total-cards-in-stock").await?;
    let booster_boxes: TotalBoosterBoxes = fetch_kpi("/total-booster-boxes").await?;
    let top_pokemon: TopPokemon = fetch_kpi("/top-pokemon-by-stock").await?;
    let top_collection: TopCollection = fetch_kpi("/top-collection-by-items").await?;

    Ok(OverviewKpis {
        total_cards,
        booster_boxes,
        top_pokemon,
        top_collection,
    })
}

/// Rows are loosely typed; the chart fields are detected at render time
pub async fn fetch_sales_overview() -> Vec<Value> {
    request_json_or_default(&dashboard_url("/sales-overview")).await
}

pub async fn fetch_monthly_acquisitions() -> Vec<Value> {
    request_json_or_default(&dashboard_url("/monthly-acquisitions")).await
}

pub async fn fetch_stock_aging() -> Vec<Value> {
    request_json_or_default(&dashboard_url("/stock-aging-overview")).await
}

pub async fn fetch_valued_cards() -> Vec<ValuedCard> {
    request_json_or_default(&dashboard_url("/valued-cards")).await
}
