use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::charting::format_month_label;
use crate::shared::serde_utils::{lenient_f64, lenient_opt_f64};

/// Date range sent as `start` / `end` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// `?start=2025-01-01&end=2025-12-31`
    pub fn query(&self) -> String {
        format!(
            "?start={}&end={}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Default for DateRange {
    /// Calendar year 2025, the range the analytics page opens with
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Entry of `GET /distribution/historical?date=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    #[serde(default, alias = "categoryName")]
    pub category: Option<String>,
    #[serde(default, alias = "totalQuantity", deserialize_with = "lenient_f64")]
    pub total_quantity: f64,
}

/// Entry of `GET /sales`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSalesRow {
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, alias = "totalSold", deserialize_with = "lenient_f64")]
    pub total_sold: f64,
}

/// Entry of `GET /profit`
///
/// Some deployments only report `total_quantity` for this endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitRow {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "totalProfit", deserialize_with = "lenient_opt_f64")]
    pub total_profit: Option<f64>,
    #[serde(default, alias = "totalQuantity", deserialize_with = "lenient_opt_f64")]
    pub total_quantity: Option<f64>,
}

impl ProfitRow {
    pub fn value(&self) -> f64 {
        self.total_profit.or(self.total_quantity).unwrap_or(0.0)
    }
}

/// Entry of `GET /spend-earn`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendEarnRow {
    #[serde(default, alias = "monthYear", alias = "month")]
    pub month_year: Option<String>,
    #[serde(default, alias = "totalSpent", alias = "spent", deserialize_with = "lenient_f64")]
    pub total_spent: f64,
    #[serde(default, alias = "totalEarned", alias = "earned", deserialize_with = "lenient_f64")]
    pub total_earned: f64,
}

/// Entry of `GET /valuation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationRow {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_stock_value: f64,
}

/// pt-BR name of an inventory category code
pub fn category_label(code: Option<&str>) -> String {
    let code = code.unwrap_or_default();
    match code.to_uppercase().as_str() {
        "CARTAS_AVULSAS" => "Cartas Avulsas".to_string(),
        "BOOSTER_BOX" => "Booster Box".to_string(),
        "BOOSTER" => "Boosters".to_string(),
        "ACCESSORY" => "Acessórios".to_string(),
        "OUTROS" => "Outros".to_string(),
        "" => "Desconhecido".to_string(),
        _ => code.to_string(),
    }
}

/// Month axis label; text that is not a month key is kept as is
pub fn month_axis_label(raw: Option<&str>) -> String {
    raw.map(format_month_label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(Some("booster_box")), "Booster Box");
        assert_eq!(category_label(Some("CARTAS_AVULSAS")), "Cartas Avulsas");
        assert_eq!(category_label(Some("SLEEVES")), "SLEEVES");
        assert_eq!(category_label(None), "Desconhecido");
    }

    #[test]
    fn test_spend_earn_aliases() {
        let rows: Vec<SpendEarnRow> = serde_json::from_value(json!([
            {"month_year": "2025-01", "total_spent": 10, "total_earned": 20},
            {"monthYear": "2025-02", "totalSpent": "5.5", "totalEarned": 7},
            {"month": "2025-03", "spent": 1, "earned": 2}
        ]))
        .unwrap();
        assert_eq!(rows[1].total_spent, 5.5);
        assert_eq!(rows[2].month_year.as_deref(), Some("2025-03"));
        assert_eq!(month_axis_label(rows[0].month_year.as_deref()), "jan/25");
    }

    #[test]
    fn test_profit_value_fallback() {
        let row: ProfitRow =
            serde_json::from_value(json!({"category": "BOOSTER", "total_quantity": 9})).unwrap();
        assert_eq!(row.value(), 9.0);
        let row: ProfitRow =
            serde_json::from_value(json!({"category": "BOOSTER", "totalProfit": 3, "total_quantity": 9}))
                .unwrap();
        assert_eq!(row.value(), 3.0);
    }

    #[test]
    fn test_date_range_query() {
        assert_eq!(DateRange::default().query(), "?start=2025-01-01&end=2025-12-31");
        let swapped = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        assert_eq!(swapped.query(), "?start=2025-03-01&end=2025-06-01");
    }
}
