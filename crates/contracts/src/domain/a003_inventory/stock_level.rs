//! Client-side stock bucketing
//!
//! The backend only reports quantities; the badge shown next to a product and
//! the stock filter of the product list both derive from one threshold table.

use serde::{Deserialize, Serialize};

/// Upper bounds (inclusive) of the non-empty stock buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    /// Quantities in `1..=low_max` are "low"
    pub low_max: i64,
    /// Quantities in `low_max+1..=medium_max` are "medium"; `None` disables the bucket
    #[serde(default)]
    pub medium_max: Option<i64>,
}

impl StockThresholds {
    /// Product list table: out / low (<= 5) / available
    pub const PRODUCT_LIST: StockThresholds = StockThresholds {
        low_max: 5,
        medium_max: None,
    };

    /// Inventory table: out / low (<= 10) / medium (<= 30) / high
    pub const INVENTORY: StockThresholds = StockThresholds {
        low_max: 10,
        medium_max: Some(30),
    };

    pub fn level(&self, quantity: i64) -> StockLevel {
        if quantity <= 0 {
            return StockLevel::Out;
        }
        if quantity <= self.low_max {
            return StockLevel::Low;
        }
        match self.medium_max {
            Some(medium_max) if quantity <= medium_max => StockLevel::Medium,
            _ => StockLevel::High,
        }
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self::PRODUCT_LIST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Out,
    Low,
    Medium,
    High,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Out => "Sem estoque",
            StockLevel::Low => "Baixo",
            StockLevel::Medium => "Médio",
            StockLevel::High => "Disponível",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Out => "zerado",
            StockLevel::Low => "baixo",
            StockLevel::Medium => "medio",
            StockLevel::High => "alto",
        }
    }

    /// Key used by the stock filter select
    pub fn key(&self) -> &'static str {
        match self {
            StockLevel::Out => "out",
            StockLevel::Low => "low",
            StockLevel::Medium => "medium",
            StockLevel::High => "available",
        }
    }
}

/// Stock filter of the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    /// More than the low cutoff
    Available,
    /// Between 1 and the low cutoff
    Low,
    /// Nothing left
    Out,
}

impl StockFilter {
    pub fn key(&self) -> &'static str {
        match self {
            StockFilter::Available => "available",
            StockFilter::Low => "low",
            StockFilter::Out => "out",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockFilter::Available => "Disponível",
            StockFilter::Low => "Estoque baixo",
            StockFilter::Out => "Sem estoque",
        }
    }

    pub fn all() -> Vec<StockFilter> {
        vec![StockFilter::Available, StockFilter::Low, StockFilter::Out]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "available" => Some(StockFilter::Available),
            "low" => Some(StockFilter::Low),
            "out" => Some(StockFilter::Out),
            _ => None,
        }
    }

    pub fn matches(&self, quantity: i64, thresholds: &StockThresholds) -> bool {
        let level = thresholds.level(quantity);
        match self {
            StockFilter::Available => matches!(level, StockLevel::Medium | StockLevel::High),
            StockFilter::Low => level == StockLevel::Low,
            StockFilter::Out => level == StockLevel::Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_out_of_stock() {
        let level = StockThresholds::PRODUCT_LIST.level(0);
        assert_eq!(level, StockLevel::Out);
        assert_eq!(level.label(), "Sem estoque");
        assert_eq!(StockThresholds::INVENTORY.level(0), StockLevel::Out);
    }

    #[test]
    fn test_five_is_low_on_product_list() {
        let level = StockThresholds::PRODUCT_LIST.level(5);
        assert_eq!(level.label(), "Baixo");
        assert_eq!(level.key(), "low");
        assert_eq!(StockThresholds::PRODUCT_LIST.level(6), StockLevel::High);
    }

    #[test]
    fn test_inventory_table_buckets() {
        let t = StockThresholds::INVENTORY;
        assert_eq!(t.level(10), StockLevel::Low);
        assert_eq!(t.level(11), StockLevel::Medium);
        assert_eq!(t.level(30), StockLevel::Medium);
        let high = t.level(31);
        assert_eq!(high, StockLevel::High);
        assert_eq!(high.label(), "Disponível");
        assert_eq!(high.css_class(), "alto");
    }

    #[test]
    fn test_filters_partition_quantities() {
        let t = StockThresholds::PRODUCT_LIST;
        for q in 0..50 {
            let hits = StockFilter::all()
                .iter()
                .filter(|f| f.matches(q, &t))
                .count();
            assert_eq!(hits, 1, "quantity {q} must match exactly one filter");
        }
    }
}
