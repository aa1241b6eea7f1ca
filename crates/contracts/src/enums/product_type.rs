use serde::{Deserialize, Serialize};

/// Product families sold by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Card,
    BoosterBox,
    Accessory,
    #[serde(alias = "OTHER_PRODUCT")]
    Other,
}

impl ProductType {
    /// Wire code used by the REST API
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Card => "CARD",
            ProductType::BoosterBox => "BOOSTER_BOX",
            ProductType::Accessory => "ACCESSORY",
            ProductType::Other => "OTHER",
        }
    }

    /// Human readable label (pt-BR)
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Card => "Carta",
            ProductType::BoosterBox => "Booster Box",
            ProductType::Accessory => "Acessório",
            ProductType::Other => "Outro Produto",
        }
    }

    /// CSS modifier used by product cards and badges
    pub fn css_class(&self) -> &'static str {
        match self {
            ProductType::Card => "card-type",
            ProductType::BoosterBox => "booster-type",
            ProductType::Accessory => "accessory-type",
            ProductType::Other => "other-type",
        }
    }

    /// Types stored through the `other_product` sub-record
    pub fn is_other_product(&self) -> bool {
        !matches!(self, ProductType::Card)
    }

    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Card,
            ProductType::BoosterBox,
            ProductType::Accessory,
            ProductType::Other,
        ]
    }

    /// Parses a wire code; empty string means "no filter"
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "CARD" => Some(ProductType::Card),
            "BOOSTER_BOX" => Some(ProductType::BoosterBox),
            "ACCESSORY" => Some(ProductType::Accessory),
            "OTHER" | "OTHER_PRODUCT" => Some(ProductType::Other),
            _ => None,
        }
    }
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Other
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_legacy_alias() {
        assert_eq!(ProductType::from_code("OTHER_PRODUCT"), Some(ProductType::Other));
        assert_eq!(ProductType::from_code("booster_box"), Some(ProductType::BoosterBox));
        assert_eq!(ProductType::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&ProductType::BoosterBox).unwrap();
        assert_eq!(json, "\"BOOSTER_BOX\"");
        let parsed: ProductType = serde_json::from_str("\"OTHER_PRODUCT\"").unwrap();
        assert_eq!(parsed, ProductType::Other);
    }
}
