use contracts::usecases::u501_scan_card::{CardMatch, ScanResponse, UPLOAD_FIELD};
use web_sys::{File, FormData};

use crate::shared::api_utils::{post_form, ApiError};
use crate::shared::config::config;

/// Uploads the photo to the scanner and returns the matched card
pub async fn scan_card(file: &File) -> Result<CardMatch, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let response: ScanResponse = post_form(&config().api.scanner_url, form).await?;
    Ok(response.card())
}
