use contracts::dashboards::d401_analytics::dto::{
    CardSalesRow, DateRange, DistributionRow, ProfitRow, SpendEarnRow, ValuationRow,
};

use crate::shared::api_utils::request_json_or_default;
use crate::shared::config::config;

fn analytics_url(path: &str) -> String {
    config().api.analytics(path)
}

/// Query of the distribution endpoint: the end of the chosen day, url-encoded
pub fn distribution_query(date: &str) -> String {
    format!(
        "?date={}",
        urlencoding::encode(&format!("{}T23:59:59", date))
    )
}

/// Inventory per category as it stood at the end of `date` (`YYYY-MM-DD`)
pub async fn fetch_distribution(date: &str) -> Vec<DistributionRow> {
    let path = format!("/distribution/historical{}", distribution_query(date));
    request_json_or_default(&analytics_url(&path)).await
}

pub async fn fetch_card_sales(range: DateRange) -> Vec<CardSalesRow> {
    request_json_or_default(&analytics_url(&format!("/sales{}", range.query()))).await
}

pub async fn fetch_profit(range: DateRange) -> Vec<ProfitRow> {
    request_json_or_default(&analytics_url(&format!("/profit{}", range.query()))).await
}

pub async fn fetch_spend_earn(range: DateRange) -> Vec<SpendEarnRow> {
    request_json_or_default(&analytics_url(&format!("/spend-earn{}", range.query()))).await
}

pub async fn fetch_valuation(range: DateRange) -> Vec<ValuationRow> {
    request_json_or_default(&analytics_url(&format!("/valuation{}", range.query()))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_query_encodes_end_of_day() {
        assert_eq!(distribution_query("2025-03-10"), "?date=2025-03-10T23%3A59%3A59");
    }
}
