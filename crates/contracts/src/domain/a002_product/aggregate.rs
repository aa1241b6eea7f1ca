use serde::{Deserialize, Serialize};

use crate::domain::a003_inventory::{StockLevel, StockThresholds};
use crate::enums::{CardCondition, ProductType};
use crate::shared::serde_utils::{lenient_f64, null_default};

/// Card attributes attached to a `CARD` product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub pokemon_type: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// Attributes of booster boxes, accessories and other sealed products
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub package_contents: Option<String>,
    #[serde(default)]
    pub extra_info: Option<String>,
}

/// Product as listed by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub condition: CardCondition,
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub other_product: Option<OtherProduct>,
    /// Units in stock; only some endpoints report it
    #[serde(default, alias = "quantity")]
    pub stock: Option<i64>,
    /// Raw type code, kept as text so unknown codes do not break the list
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
}

impl Product {
    /// Explicit `type`, else CARD when a card is attached, else the
    /// `other_product.type`, else OTHER
    pub fn effective_type(&self) -> ProductType {
        if let Some(t) = self.product_type.as_deref().and_then(ProductType::from_code) {
            return t;
        }
        if self.card.is_some() {
            return ProductType::Card;
        }
        self.other_product
            .as_ref()
            .and_then(|o| o.product_type.as_deref())
            .and_then(ProductType::from_code)
            .unwrap_or(ProductType::Other)
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock.unwrap_or(0)
    }

    pub fn stock_level(&self, thresholds: &StockThresholds) -> StockLevel {
        thresholds.level(self.stock_quantity())
    }

    pub fn card_title(&self) -> Option<&str> {
        self.card.as_ref().and_then(|c| c.title.as_deref())
    }

    pub fn card_code(&self) -> Option<&str> {
        self.card.as_ref().and_then(|c| c.code.as_deref())
    }
}

/// Body of `PUT /products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub condition: CardCondition,
    pub store_id: String,
}

impl ProductUpdate {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            condition: product.condition,
            store_id: product.store_id.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Nome do produto é obrigatório".to_string());
        }
        if self.price.is_nan() || self.price <= 0.0 {
            errors.push("Preço deve ser maior que zero".to_string());
        }
        if self.store_id.trim().is_empty() {
            errors.push("Loja de destino é obrigatória".to_string());
        }
        errors
    }
}

/// Body of `PUT /cards/{id}`; blank inputs keep the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardUpdate {
    pub title: String,
    pub season: String,
    pub code: String,
    pub rarity: String,
    pub pokemon_type: String,
    pub nationality: String,
    pub collection_id: String,
}

impl CardUpdate {
    /// Merges edited fields over the current card
    pub fn merge(current: &Card, edited: &Card) -> Self {
        fn pick(edited: &Option<String>, current: &Option<String>) -> String {
            edited
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .or(current.as_deref())
                .unwrap_or_default()
                .to_string()
        }
        Self {
            title: pick(&edited.title, &current.title),
            season: pick(&edited.season, &current.season),
            code: pick(&edited.code, &current.code),
            rarity: pick(&edited.rarity, &current.rarity),
            pokemon_type: pick(&edited.pokemon_type, &current.pokemon_type),
            nationality: pick(&edited.nationality, &current.nationality),
            collection_id: pick(&edited.collection_id, &current.collection_id),
        }
    }
}

/// `other_product` block of a create request and body of `PUT /other-products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherProductDto {
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub nationality: String,
    pub package_contents: String,
    pub extra_info: String,
}

/// Body of `POST /products`
///
/// Card attributes travel flat on the payload, other product attributes are
/// nested under `other_product`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub price: f64,
    pub store_id: String,
    pub condition: Option<CardCondition>,
    /// Existing product to link when stocking a secondary store
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pokemon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_product: Option<OtherProductDto>,
}

impl CreateProductRequest {
    /// Drops the fields that do not belong to the selected type and the
    /// product link when the target is the main store
    pub fn normalized(mut self, main_store_id: &str) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self.product_id = self
            .product_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && self.store_id != main_store_id);

        match self.product_type {
            Some(ProductType::Card) => {
                self.other_product = None;
                for field in [
                    &mut self.title,
                    &mut self.season,
                    &mut self.pokemon_type,
                    &mut self.collection_id,
                    &mut self.code,
                    &mut self.rarity,
                    &mut self.nationality,
                ] {
                    *field = Some(field.take().unwrap_or_default().trim().to_string());
                }
            }
            Some(other) => {
                self.title = None;
                self.season = None;
                self.pokemon_type = None;
                self.collection_id = None;
                self.code = None;
                self.rarity = None;
                self.nationality = None;
                let mut block = self.other_product.take().unwrap_or_default();
                block.product_type = other;
                self.other_product = Some(block);
            }
            None => {}
        }
        self
    }

    /// Checks the form before it is sent; one message per problem
    pub fn validate(&self, main_store_id: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Nome do produto é obrigatório".to_string());
        }
        if self.product_type.is_none() {
            errors.push("Tipo do produto é obrigatório".to_string());
        }
        if self.price.is_nan() || self.price <= 0.0 {
            errors.push("Preço deve ser maior que zero".to_string());
        }
        if self.store_id.trim().is_empty() {
            errors.push("Loja de destino é obrigatória".to_string());
        }
        if self.condition.is_none() {
            errors.push("Condição do produto é obrigatória".to_string());
        }
        if self.product_type == Some(ProductType::Card)
            && self.title.as_deref().map_or(true, |t| t.trim().is_empty())
        {
            errors.push("Título da carta é obrigatório".to_string());
        }
        let secondary = !self.store_id.trim().is_empty() && self.store_id != main_store_id;
        if secondary && self.product_id.as_deref().map_or(true, |p| p.trim().is_empty()) {
            errors.push("ID do produto existente é obrigatório para lojas secundárias".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAIN: &str = "2ab08857-c06c-4fa2-8d6b-0e6822d1d528";

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_effective_type_precedence() {
        let explicit = product(json!({"id": "1", "type": "ACCESSORY", "card": {"title": "x"}}));
        assert_eq!(explicit.effective_type(), ProductType::Accessory);

        let card = product(json!({"id": "2", "card": {"title": "Pikachu"}}));
        assert_eq!(card.effective_type(), ProductType::Card);

        let other = product(json!({"id": "3", "other_product": {"type": "BOOSTER_BOX"}}));
        assert_eq!(other.effective_type(), ProductType::BoosterBox);

        let bare = product(json!({"id": "4", "type": "SOMETHING_NEW"}));
        assert_eq!(bare.effective_type(), ProductType::Other);
    }

    #[test]
    fn test_unknown_condition_does_not_fail_list() {
        let p = product(json!({"id": "1", "name": "Box", "condition": "FACTORY_SEALED"}));
        assert_eq!(p.condition, CardCondition::Unknown);
        assert_eq!(p.stock_quantity(), 0);
    }

    fn valid_card() -> CreateProductRequest {
        CreateProductRequest {
            name: "Charizard".into(),
            product_type: Some(ProductType::Card),
            price: 120.0,
            store_id: MAIN.into(),
            condition: Some(CardCondition::NearMint),
            title: Some("Charizard ex".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_card_passes() {
        assert!(valid_card().validate(MAIN).is_empty());
    }

    #[test]
    fn test_validation_messages() {
        let req = CreateProductRequest {
            price: 0.0,
            ..Default::default()
        };
        let errors = req.validate(MAIN);
        assert!(errors.contains(&"Nome do produto é obrigatório".to_string()));
        assert!(errors.contains(&"Tipo do produto é obrigatório".to_string()));
        assert!(errors.contains(&"Preço deve ser maior que zero".to_string()));
        assert!(errors.contains(&"Loja de destino é obrigatória".to_string()));
        assert!(errors.contains(&"Condição do produto é obrigatória".to_string()));
    }

    #[test]
    fn test_card_requires_title() {
        let mut req = valid_card();
        req.title = Some("   ".into());
        assert_eq!(req.validate(MAIN), vec!["Título da carta é obrigatório".to_string()]);
    }

    #[test]
    fn test_secondary_store_requires_existing_product() {
        let mut req = valid_card();
        req.store_id = "another-store".into();
        assert_eq!(
            req.validate(MAIN),
            vec!["ID do produto existente é obrigatório para lojas secundárias".to_string()]
        );
        req.product_id = Some("p-1".into());
        assert!(req.validate(MAIN).is_empty());
    }

    #[test]
    fn test_normalized_other_product_payload() {
        let req = CreateProductRequest {
            name: " Booster ".into(),
            product_type: Some(ProductType::BoosterBox),
            price: 300.0,
            store_id: MAIN.into(),
            condition: Some(CardCondition::Sealed),
            title: Some("leftover".into()),
            product_id: Some("p-9".into()),
            ..Default::default()
        }
        .normalized(MAIN);

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["name"], "Booster");
        assert_eq!(body["type"], "BOOSTER_BOX");
        assert_eq!(body["other_product"]["type"], "BOOSTER_BOX");
        assert!(body.get("title").is_none());
        assert!(body.get("productId").is_none());
    }

    #[test]
    fn test_card_update_keeps_current_values() {
        let current = Card {
            id: Some("c1".into()),
            title: Some("Mew".into()),
            season: Some("151".into()),
            code: Some("151/165".into()),
            ..Default::default()
        };
        let edited = Card {
            title: Some("".into()),
            code: Some("205/165".into()),
            ..Default::default()
        };
        let update = CardUpdate::merge(&current, &edited);
        assert_eq!(update.title, "Mew");
        assert_eq!(update.season, "151");
        assert_eq!(update.code, "205/165");
        assert_eq!(update.rarity, "");
    }
}
