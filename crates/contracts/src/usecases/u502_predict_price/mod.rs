//! Price estimate from the pricing model service

use serde::{Deserialize, Serialize};

use crate::usecases::common::UseCaseMetadata;

pub struct PredictPrice;

impl UseCaseMetadata for PredictPrice {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "predict_price"
    }

    fn display_name() -> &'static str {
        "Estimar preço"
    }
}

/// Field names follow the model service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePredictionRequest {
    pub raridade: String,
    pub sub_tipo: String,
}

impl PricePredictionRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.raridade.trim().is_empty() {
            errors.push("Informe a raridade da carta".to_string());
        }
        if self.sub_tipo.trim().is_empty() {
            errors.push("Informe o subtipo da carta".to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub min_price: f64,
    pub fair_price: f64,
    pub max_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Error body of the model service, e.g. unknown rarity
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let req = PricePredictionRequest {
            raridade: "Rare Holo".into(),
            sub_tipo: "Pokemon".into(),
        };
        assert!(req.validate().is_empty());
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["raridade"], "Rare Holo");
        assert_eq!(body["sub_tipo"], "Pokemon");
    }

    #[test]
    fn test_response_without_currency() {
        let p: PricePrediction =
            serde_json::from_str(r#"{"min_price":1.5,"fair_price":2.0,"max_price":3.25}"#).unwrap();
        assert_eq!(p.currency, None);
        assert_eq!(p.max_price, 3.25);
    }
}
