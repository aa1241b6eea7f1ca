//! Client-side filtering of the product list
//!
//! Every criterion is an independent predicate; a product is kept when all of
//! them accept it. The input order is preserved, nothing is sorted here.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;
use crate::domain::a003_inventory::{StockFilter, StockThresholds};
use crate::enums::{CardCondition, ProductType};

/// Price buckets of the filter select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    /// 0 to 10, both ends included
    #[serde(rename = "0-10")]
    UpTo10,
    /// Above 10 up to 50
    #[serde(rename = "10-50")]
    UpTo50,
    /// Above 50 up to 100
    #[serde(rename = "50-100")]
    UpTo100,
    /// Above 100
    #[serde(rename = "100+")]
    Above100,
}

impl PriceBand {
    pub fn key(&self) -> &'static str {
        match self {
            PriceBand::UpTo10 => "0-10",
            PriceBand::UpTo50 => "10-50",
            PriceBand::UpTo100 => "50-100",
            PriceBand::Above100 => "100+",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBand::UpTo10 => "Até R$ 10",
            PriceBand::UpTo50 => "R$ 10 - R$ 50",
            PriceBand::UpTo100 => "R$ 50 - R$ 100",
            PriceBand::Above100 => "Acima de R$ 100",
        }
    }

    pub fn all() -> Vec<PriceBand> {
        vec![
            PriceBand::UpTo10,
            PriceBand::UpTo50,
            PriceBand::UpTo100,
            PriceBand::Above100,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|b| b.key() == key)
    }

    /// Bands are disjoint and cover `[0, inf)`; negative or NaN prices match none
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::UpTo10 => (0.0..=10.0).contains(&price),
            PriceBand::UpTo50 => price > 10.0 && price <= 50.0,
            PriceBand::UpTo100 => price > 50.0 && price <= 100.0,
            PriceBand::Above100 => price > 100.0,
        }
    }

    pub fn for_price(price: f64) -> Option<Self> {
        Self::all().into_iter().find(|b| b.contains(price))
    }
}

/// Current state of the product list filters; `None` / blank means "any"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<ProductType>,
    pub condition: Option<CardCondition>,
    /// Matched against `store_name`
    pub store: Option<String>,
    pub price: Option<PriceBand>,
    pub stock: Option<StockFilter>,
    pub thresholds: StockThresholds,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.condition.is_none()
            && self.store.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }

    /// Resets every criterion except the search text
    pub fn clear_keep_search(&self) -> Self {
        Self {
            search: self.search.clone(),
            thresholds: self.thresholds,
            ..Default::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self
                .category
                .map_or(true, |c| product.effective_type() == c)
            && self.condition.map_or(true, |c| product.condition == c)
            && self
                .store
                .as_deref()
                .map_or(true, |s| product.store_name.as_deref() == Some(s))
            && self.price.map_or(true, |b| b.contains(product.price))
            && self
                .stock
                .map_or(true, |f| f.matches(product.stock_quantity(), &self.thresholds))
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = [
            Some(product.name.as_str()),
            product.description.as_deref(),
            Some(product.effective_type().display_name()),
            product.store_name.as_deref(),
            product.card_title(),
            product.card_code(),
        ];
        haystack
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keeps the products accepted by every criterion, in input order
pub fn apply_filters(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Distinct non-empty store names, in first-seen order
pub fn store_names(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in products.iter().filter_map(|p| p.store_name.as_deref()) {
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Product> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Pikachu", "price": 10.0, "condition": "MINT", "store_name": "Centro",
             "stock": 0, "card": {"title": "Pikachu VMAX", "code": "044/185"}},
            {"id": "2", "name": "Booster Box Obsidian", "price": 650.0, "condition": "SEALED",
             "store_name": "Shopping", "stock": 3, "other_product": {"type": "BOOSTER_BOX"}},
            {"id": "3", "name": "Sleeves", "description": "Pacote com 65 unidades", "price": 35.5,
             "condition": "NEW", "store_name": "Centro", "stock": 40, "type": "ACCESSORY"},
            {"id": "4", "name": "Charizard", "price": 100.0, "condition": "NEAR_MINT",
             "store_name": "Shopping", "stock": 5, "card": {"title": "Charizard ex", "code": "199/165"}}
        ]))
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let all = catalog();
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&apply_filters(&all, &filter)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_search_covers_card_fields_and_description() {
        let all = catalog();
        let by_code = ProductFilter {
            search: "199/165".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &by_code)), vec!["4"]);

        let by_description = ProductFilter {
            search: "  UNIDADES ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &by_description)), vec!["3"]);

        let by_category = ProductFilter {
            search: "carta".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &by_category)), vec!["1", "4"]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let all = catalog();
        let filter = ProductFilter {
            category: Some(ProductType::Card),
            store: Some("Shopping".into()),
            price: Some(PriceBand::UpTo100),
            stock: Some(StockFilter::Low),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &filter)), vec!["4"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let all = catalog();
        let filters = [
            ProductFilter {
                search: "o".into(),
                ..Default::default()
            },
            ProductFilter {
                price: Some(PriceBand::UpTo10),
                stock: Some(StockFilter::Out),
                ..Default::default()
            },
            ProductFilter {
                condition: Some(CardCondition::Sealed),
                ..Default::default()
            },
        ];
        for filter in filters {
            let once = apply_filters(&all, &filter);
            let twice = apply_filters(&once, &filter);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_price_bands_partition_non_negative_prices() {
        let samples = [0.0, 0.01, 9.99, 10.0, 10.01, 49.9, 50.0, 50.5, 100.0, 100.01, 1e9];
        for price in samples {
            let hits = PriceBand::all().iter().filter(|b| b.contains(price)).count();
            assert_eq!(hits, 1, "price {price} must fall in exactly one band");
        }
        assert_eq!(PriceBand::for_price(-1.0), None);
        assert_eq!(PriceBand::for_price(10.0), Some(PriceBand::UpTo10));
        assert_eq!(PriceBand::for_price(100.0), Some(PriceBand::UpTo100));
    }

    #[test]
    fn test_clear_keeps_search() {
        let filter = ProductFilter {
            search: "pika".into(),
            price: Some(PriceBand::Above100),
            ..Default::default()
        };
        let cleared = filter.clear_keep_search();
        assert_eq!(cleared.search, "pika");
        assert_eq!(cleared.price, None);
    }

    #[test]
    fn test_store_names_are_distinct() {
        assert_eq!(store_names(&catalog()), vec!["Centro", "Shopping"]);
    }
}
