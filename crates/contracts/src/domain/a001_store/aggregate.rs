use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::lenient_string;

/// Physical store (branch) of the retail network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cep: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Payload for creating or updating a store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub name: String,
    pub cep: String,
    pub number: String,
    pub complement: String,
}

impl StoreDto {
    pub fn from_store(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            cep: store.cep.clone(),
            number: store.number.clone(),
            complement: store.complement.clone().unwrap_or_default(),
        }
    }

    /// Checks required fields; returns user-facing messages
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Nome da loja é obrigatório".to_string());
        }
        if sanitize_cep(&self.cep).len() != 8 {
            errors.push("CEP deve conter exatamente 8 dígitos".to_string());
        }
        if self.number.trim().is_empty() {
            errors.push("Número é obrigatório".to_string());
        }
        errors
    }
}

/// Keeps only the digits of a CEP input
pub fn sanitize_cep(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 12345678 -> 12345-678; anything else is returned as is
pub fn format_cep(cep: &str) -> String {
    if cep.len() == 8 && cep.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}", &cep[..5], &cep[5..])
    } else {
        cep.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("0131"), "0131");
    }

    #[test]
    fn test_sanitize_cep_strips_mask() {
        assert_eq!(sanitize_cep("01310-100"), "01310100");
    }

    #[test]
    fn test_validate_rejects_short_cep() {
        let dto = StoreDto {
            name: "Loja Centro".into(),
            cep: "1234".into(),
            number: "10".into(),
            complement: String::new(),
        };
        assert_eq!(dto.validate(), vec!["CEP deve conter exatamente 8 dígitos".to_string()]);
    }

    #[test]
    fn test_store_accepts_camel_case_created_at() {
        let store: Store = serde_json::from_str(
            r#"{"id":"s1","name":"Loja","cep":"01310100","number":"5","createdAt":"2025-03-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(store.created_at.as_deref(), Some("2025-03-01T10:00:00"));
        assert_eq!(store.complement, None);
    }

    #[test]
    fn test_store_tolerates_null_and_numeric_fields() {
        let stores: Vec<Store> = serde_json::from_str(
            r#"[{"id":"s1","name":"Loja","cep":"01310100","number":"5"},{"id":2,"name":"Filial","cep":null,"number":120}]"#,
        )
        .unwrap();
        assert_eq!(stores[1].id, "2");
        assert_eq!(stores[1].cep, "");
        assert_eq!(stores[1].number, "120");
    }
}
