use serde::{Deserialize, Serialize};

/// Physical grading of a collectible item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardCondition {
    Mint,
    NearMint,
    LightlyPlayed,
    ModeratelyPlayed,
    HeavilyPlayed,
    Damaged,
    Sealed,
    Opened,
    New,
    Used,
    /// Grade sent by the backend that this client does not know yet
    #[serde(other)]
    Unknown,
}

impl Default for CardCondition {
    fn default() -> Self {
        CardCondition::Mint
    }
}

impl CardCondition {
    pub fn code(&self) -> &'static str {
        match self {
            CardCondition::Mint => "MINT",
            CardCondition::NearMint => "NEAR_MINT",
            CardCondition::LightlyPlayed => "LIGHTLY_PLAYED",
            CardCondition::ModeratelyPlayed => "MODERATELY_PLAYED",
            CardCondition::HeavilyPlayed => "HEAVILY_PLAYED",
            CardCondition::Damaged => "DAMAGED",
            CardCondition::Sealed => "SEALED",
            CardCondition::Opened => "OPENED",
            CardCondition::New => "NEW",
            CardCondition::Used => "USED",
            CardCondition::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardCondition::Mint => "Perfeito",
            CardCondition::NearMint => "Quase Perfeito",
            CardCondition::LightlyPlayed => "Levemente Usado",
            CardCondition::ModeratelyPlayed => "Moderadamente Usado",
            CardCondition::HeavilyPlayed => "Muito Usado",
            CardCondition::Damaged => "Danificado",
            CardCondition::Sealed => "Lacrado",
            CardCondition::Opened => "Aberto",
            CardCondition::New => "Novo",
            CardCondition::Used => "Usado",
            CardCondition::Unknown => "N/A",
        }
    }

    /// Grades offered in product forms
    pub fn all() -> Vec<CardCondition> {
        vec![
            CardCondition::Mint,
            CardCondition::NearMint,
            CardCondition::LightlyPlayed,
            CardCondition::ModeratelyPlayed,
            CardCondition::HeavilyPlayed,
            CardCondition::Damaged,
            CardCondition::Sealed,
            CardCondition::Opened,
            CardCondition::New,
            CardCondition::Used,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_grade_does_not_fail_deserialization() {
        let parsed: CardCondition = serde_json::from_str("\"GRADED_PSA_10\"").unwrap();
        assert_eq!(parsed, CardCondition::Unknown);
        assert_eq!(parsed.display_name(), "N/A");
    }

    #[test]
    fn test_codes_round_through_from_code() {
        for c in CardCondition::all() {
            assert_eq!(CardCondition::from_code(c.code()), Some(c));
        }
    }
}
