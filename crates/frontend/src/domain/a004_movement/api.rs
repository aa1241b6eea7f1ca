use contracts::domain::a004_movement::{CreateMovementRequest, MovementRecord};

use crate::shared::api_utils::{api_url, get_json, send_json, ApiError, Method};

pub async fn create_movement(request: &CreateMovementRequest) -> Result<serde_json::Value, ApiError> {
    send_json(Method::Post, &api_url("/inventory-movements"), request).await
}

pub async fn fetch_audits() -> Result<Vec<MovementRecord>, ApiError> {
    get_json(&api_url("/inventory-audits")).await
}
