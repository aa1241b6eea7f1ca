use serde::Deserialize;

use crate::domain::a003_inventory::StockThresholds;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub stock: StockConfig,
}

/// Service endpoints; relative paths resolve against the page origin
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub dashboard_url: String,
    pub analytics_url: String,
    pub scanner_url: String,
    pub price_model_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub items_per_page: usize,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub movements_refresh_ms: u32,
    pub dashboard_refresh_ms: u32,
    pub movements_limit: usize,
    /// Store that owns the catalogue; other stores link existing products
    pub main_store_id: String,
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,
}

fn default_storage_prefix() -> String {
    "stock_".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StockConfig {
    pub product_list: StockThresholds,
    pub inventory: StockThresholds,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api/store-manager-api"
dashboard_url = "/api/dashboard"
analytics_url = "/api/store-manager-api/dashboard"
scanner_url = "/scanner-api/upload"
price_model_url = "/price-model-api/predict"

[ui]
items_per_page = 10
search_debounce_ms = 300
toast_duration_ms = 5000
movements_refresh_ms = 10000
dashboard_refresh_ms = 30000
movements_limit = 40
main_store_id = "2ab08857-c06c-4fa2-8d6b-0e6822d1d528"
storage_prefix = "stock_"

[stock.product_list]
low_max = 5

[stock.inventory]
low_max = 10
medium_max = 30
"#;

/// Parses a `config.toml` body, or the embedded default when `None`
pub fn load_config(contents: Option<&str>) -> anyhow::Result<ClientConfig> {
    let config: ClientConfig = toml::from_str(contents.unwrap_or(DEFAULT_CONFIG))?;
    if config.ui.items_per_page == 0 {
        anyhow::bail!("ui.items_per_page must be greater than zero");
    }
    for (name, thresholds) in [
        ("product_list", &config.stock.product_list),
        ("inventory", &config.stock.inventory),
    ] {
        if thresholds.medium_max.is_some_and(|medium| medium <= thresholds.low_max) {
            anyhow::bail!("stock.{}.medium_max must be greater than low_max", name);
        }
    }
    Ok(config)
}

impl Default for ClientConfig {
    /// The embedded `DEFAULT_CONFIG`, which the tests below keep valid
    fn default() -> Self {
        match load_config(None) {
            Ok(config) => config,
            Err(err) => panic!("embedded DEFAULT_CONFIG is invalid: {:#}", err),
        }
    }
}

impl ApiConfig {
    /// Joins a resource path to the main API base
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn dashboard(&self, path: &str) -> String {
        join_url(&self.dashboard_url, path)
    }

    pub fn analytics(&self, path: &str) -> String {
        join_url(&self.analytics_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "/api/store-manager-api");
        assert_eq!(config.ui.items_per_page, 10);
        assert_eq!(config.ui.movements_limit, 40);
        assert_eq!(config.ui.storage_prefix, "stock_");
        assert_eq!(config.stock.product_list, StockThresholds::PRODUCT_LIST);
        assert_eq!(config.stock.inventory, StockThresholds::INVENTORY);
    }

    #[test]
    fn test_override_config() {
        let custom = DEFAULT_CONFIG.replace(
            "base_url = \"/api/store-manager-api\"",
            "base_url = \"http://localhost:8080/store-manager-api/\"",
        );
        let config = load_config(Some(&custom)).unwrap();
        assert_eq!(
            config.api.url("/products"),
            "http://localhost:8080/store-manager-api/products"
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(load_config(Some("[api]\nbase_url = 1")).is_err());
        let zero_page = DEFAULT_CONFIG.replace("items_per_page = 10", "items_per_page = 0");
        assert!(load_config(Some(&zero_page)).is_err());
    }

    #[test]
    fn test_medium_bucket_must_sit_above_low() {
        let inverted = DEFAULT_CONFIG.replace("medium_max = 30", "medium_max = 8");
        let err = load_config(Some(&inverted)).unwrap_err();
        assert!(err.to_string().contains("stock.inventory.medium_max"));
        let equal = DEFAULT_CONFIG.replace("medium_max = 30", "medium_max = 10");
        assert!(load_config(Some(&equal)).is_err());
    }

    #[test]
    fn test_url_join() {
        let api = ClientConfig::default().api;
        assert_eq!(api.url("stores/1"), "/api/store-manager-api/stores/1");
        assert_eq!(api.dashboard("valued-cards"), "/api/dashboard/valued-cards");
    }
}
