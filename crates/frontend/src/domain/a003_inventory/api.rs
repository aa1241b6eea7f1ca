use contracts::domain::a003_inventory::InventoryItem;

use crate::shared::api_utils::{api_url, get_json, ApiError};

pub async fn fetch_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    get_json(&api_url("/inventory")).await
}
