//! Client configuration, loaded once before the app mounts

use contracts::shared::config::{load_config, ClientConfig};
use gloo_net::http::Request;
use once_cell::sync::OnceCell;

/// Served next to `index.html`; optional
const CONFIG_PATH: &str = "config.toml";

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

pub async fn init_config() {
    let config = match fetch_config_text().await {
        Ok(text) => load_config(Some(&text)).unwrap_or_else(|e| {
            log::warn!("Invalid {}: {:#}. Using built-in defaults", CONFIG_PATH, e);
            ClientConfig::default()
        }),
        Err(e) => {
            log::warn!("{} not loaded ({}). Using built-in defaults", CONFIG_PATH, e);
            ClientConfig::default()
        }
    };
    log::info!("API base: {}", config.api.base_url);
    let _ = CONFIG.set(config);
}

async fn fetch_config_text() -> Result<String, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}

pub fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}
