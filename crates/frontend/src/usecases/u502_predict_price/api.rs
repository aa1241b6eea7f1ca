use contracts::usecases::u502_predict_price::{PricePrediction, PricePredictionRequest};

use crate::shared::api_utils::{send_json, ApiError, Method};
use crate::shared::config::config;

/// The model service answers non-2xx with `{detail}`, surfaced as the
/// `ApiError::Http` message
pub async fn predict_price(request: &PricePredictionRequest) -> Result<PricePrediction, ApiError> {
    send_json(Method::Post, &config().api.price_model_url, request).await
}
