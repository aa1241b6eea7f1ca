//! Card image scan: the scanner service reads the photo and matches it
//! against the card database; the match prefills the registration form.

use serde::{Deserialize, Serialize};

use crate::usecases::common::UseCaseMetadata;

pub struct ScanCard;

impl UseCaseMetadata for ScanCard {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "scan_card"
    }

    fn display_name() -> &'static str {
        "Ler carta pela imagem"
    }

    fn description() -> &'static str {
        "Envia a foto da carta ao scanner e preenche os campos com o resultado"
    }
}

/// Multipart field carrying the image
pub const UPLOAD_FIELD: &str = "file";

/// Body returned by the scanner upload endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub database_results: Option<DatabaseResults>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseResults {
    #[serde(default)]
    pub database_match: Option<CardMatch>,
}

/// Card found by the scanner; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub pokemon_type: Option<String>,
    #[serde(default)]
    pub collection_abbreviation: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl ScanResponse {
    /// The match, or an empty one so the form fields get cleared
    pub fn card(self) -> CardMatch {
        self.database_results
            .and_then(|r| r.database_match)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_extraction() {
        let body = r#"{"database_results":{"database_match":{"title":"Mew ex","code":"151/165","rarity":"Rare"}}}"#;
        let card = serde_json::from_str::<ScanResponse>(body).unwrap().card();
        assert_eq!(card.title.as_deref(), Some("Mew ex"));
        assert_eq!(card.season, None);
    }

    #[test]
    fn test_missing_match_is_empty() {
        let card = serde_json::from_str::<ScanResponse>("{}").unwrap().card();
        assert_eq!(card, CardMatch::default());
        assert_eq!(ScanCard::full_name(), "u501_scan_card");
    }
}
