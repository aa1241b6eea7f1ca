use serde::{Deserialize, Serialize};

use super::stock_level::{StockLevel, StockThresholds};
use crate::shared::serde_utils::{lenient_i64, lenient_opt_f64};

/// Stock position of one product in one store, as returned by `/inventory`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(default)]
    pub store_name: Option<String>,
    /// Raw type code; the inventory endpoint also uses `OTHER_PRODUCT`
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub sell_unit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl InventoryItem {
    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("Produto sem nome")
    }

    /// Last change, falling back to creation time
    pub fn last_update(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }

    pub fn stock_level(&self, thresholds: &StockThresholds) -> StockLevel {
        thresholds.level(self.quantity)
    }

    /// `total_value` from the API, or quantity times unit price when absent
    pub fn value(&self) -> f64 {
        self.total_value
            .unwrap_or_else(|| self.quantity.max(0) as f64 * self.sell_unit_price.unwrap_or(0.0))
    }
}

/// Tiles shown above the inventory grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_quantity: i64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem], thresholds: &StockThresholds) -> Self {
        items.iter().fold(
            InventorySummary {
                total_items: items.len(),
                ..Default::default()
            },
            |mut acc, item| {
                acc.total_quantity += item.quantity;
                match item.stock_level(thresholds) {
                    StockLevel::Out => acc.out_of_stock += 1,
                    StockLevel::Low => acc.low_stock += 1,
                    _ => {}
                }
                acc
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64) -> InventoryItem {
        InventoryItem {
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_counts_buckets() {
        let items = vec![item(0), item(3), item(10), item(11), item(40)];
        let summary = InventorySummary::from_items(&items, &StockThresholds::INVENTORY);
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.total_quantity, 64);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let parsed: InventoryItem = serde_json::from_str(r#"{"product_name":"Pikachu"}"#).unwrap();
        assert_eq!(parsed.quantity, 0);
        assert_eq!(parsed.display_name(), "Pikachu");
        assert_eq!(parsed.last_update(), None);
    }

    #[test]
    fn test_null_and_string_numbers_decode() {
        let rows: Vec<InventoryItem> = serde_json::from_str(
            r#"[{"quantity":3},{"quantity":null,"sell_unit_price":null},{"quantity":"2","sell_unit_price":"12.50"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].quantity, 0);
        assert_eq!(rows[1].sell_unit_price, None);
        assert_eq!(rows[2].quantity, 2);
        assert_eq!(rows[2].sell_unit_price, Some(12.5));
        assert_eq!(rows[2].value(), 25.0);
    }

    #[test]
    fn test_value_falls_back_to_unit_price() {
        let mut it = item(4);
        it.sell_unit_price = Some(2.5);
        assert_eq!(it.value(), 10.0);
        it.total_value = Some(12.0);
        assert_eq!(it.value(), 12.0);
    }
}
