use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::{lenient_f64, lenient_opt_f64};

/// `GET /total-cards-in-stock`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalCardsInStock {
    /// The refresh tick of the old page read the camelCase variant
    #[serde(default, alias = "totalCardsInStock", deserialize_with = "lenient_f64")]
    pub total_cards_in_stock: f64,
}

/// `GET /total-booster-boxes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalBoosterBoxes {
    #[serde(default, alias = "totalBoosterBoxes", deserialize_with = "lenient_f64")]
    pub total_booster_boxes: f64,
}

/// `GET /top-pokemon-by-stock`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopPokemon {
    #[serde(default, rename = "pokemonName", alias = "pokemon_name")]
    pub pokemon_name: Option<String>,
    #[serde(default, alias = "totalStock", deserialize_with = "lenient_opt_f64")]
    pub total_stock: Option<f64>,
}

/// `GET /top-collection-by-items`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopCollection {
    #[serde(default, alias = "collectionName")]
    pub collection_name: Option<String>,
    #[serde(default, alias = "totalItems", deserialize_with = "lenient_opt_f64")]
    pub total_items: Option<f64>,
}

/// KPI tiles of the overview page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewKpis {
    pub total_cards: TotalCardsInStock,
    pub booster_boxes: TotalBoosterBoxes,
    pub top_pokemon: TopPokemon,
    pub top_collection: TopCollection,
}

impl OverviewKpis {
    /// "120 cartas"
    pub fn cards_text(&self) -> String {
        format!("{} cartas", self.total_cards.total_cards_in_stock.round() as i64)
    }

    /// "8 boosters"
    pub fn boosters_text(&self) -> String {
        format!("{} boosters", self.booster_boxes.total_booster_boxes.round() as i64)
    }

    /// "Top: Pikachu", or "Top: ---" when the backend had none
    pub fn top_pokemon_text(&self) -> String {
        format!(
            "Top: {}",
            self.top_pokemon
                .pokemon_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or("---")
        )
    }

    pub fn top_collection_text(&self) -> String {
        self.top_collection
            .collection_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "---".to_string())
    }
}

/// Candidate keys tried on the loosely typed chart endpoints
pub mod fields {
    pub const SALES_LABEL: &[&str] = &["month", "productName", "name"];
    pub const SALES_VALUE: &[&str] = &["totalRevenue", "sales", "value"];
    pub const SALES_SERIES: &[&str] = &["productName", "product_name"];

    pub const ACQUISITIONS_LABEL: &[&str] = &["month", "label"];
    pub const ACQUISITIONS_VALUE: &[&str] = &["totalCost", "value", "amount"];

    pub const AGING_LABEL: &[&str] = &["productName", "item", "name"];
    pub const AGING_VALUE: &[&str] = &["daysInStock", "days", "value"];
}

/// Entry of `GET /valued-cards`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuedCard {
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, alias = "avgSalePrice", deserialize_with = "lenient_opt_f64")]
    pub avg_sale_price: Option<f64>,
    #[serde(default, alias = "currentSalePrice", deserialize_with = "lenient_opt_f64")]
    pub current_sale_price: Option<f64>,
    #[serde(default, alias = "currentStock", deserialize_with = "lenient_opt_f64")]
    pub current_stock: Option<f64>,
}

impl ValuedCard {
    /// Average sale price, falling back to the current one
    pub fn avg_price(&self) -> f64 {
        self.avg_sale_price
            .or(self.current_sale_price)
            .unwrap_or(0.0)
    }

    pub fn current_price(&self) -> f64 {
        self.current_sale_price.unwrap_or(0.0)
    }

    pub fn stock(&self) -> i64 {
        self.current_stock.unwrap_or(0.0).round() as i64
    }

    pub fn name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("---")
    }
}

/// Highest average price first, ties broken by current price
pub fn top_valued_cards(mut cards: Vec<ValuedCard>, n: usize) -> Vec<ValuedCard> {
    cards.sort_by(|a, b| {
        b.avg_price()
            .total_cmp(&a.avg_price())
            .then(b.current_price().total_cmp(&a.current_price()))
    });
    cards.truncate(n);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kpis_accept_both_casings() {
        let snake: TotalCardsInStock =
            serde_json::from_value(json!({"total_cards_in_stock": 120})).unwrap();
        let camel: TotalCardsInStock =
            serde_json::from_value(json!({"totalCardsInStock": 120})).unwrap();
        assert_eq!(snake, camel);

        let kpis = OverviewKpis {
            total_cards: snake,
            ..Default::default()
        };
        assert_eq!(kpis.cards_text(), "120 cartas");
        assert_eq!(kpis.boosters_text(), "0 boosters");
        assert_eq!(kpis.top_pokemon_text(), "Top: ---");
    }

    #[test]
    fn test_top_pokemon_name() {
        let top: TopPokemon = serde_json::from_value(json!({"pokemonName": "Pikachu"})).unwrap();
        let kpis = OverviewKpis {
            top_pokemon: top,
            ..Default::default()
        };
        assert_eq!(kpis.top_pokemon_text(), "Top: Pikachu");
    }

    #[test]
    fn test_top_valued_cards_order() {
        let cards: Vec<ValuedCard> = serde_json::from_value(json!([
            {"product_name": "A", "avg_sale_price": 50.0, "current_sale_price": 40.0},
            {"product_name": "B", "current_sale_price": 80.0},
            {"product_name": "C", "avg_sale_price": 50.0, "current_sale_price": 60.0},
            {"product_name": "D", "avg_sale_price": "10"},
            {"product_name": "E"}
        ]))
        .unwrap();
        let top = top_valued_cards(cards, 3);
        let names: Vec<&str> = top.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
