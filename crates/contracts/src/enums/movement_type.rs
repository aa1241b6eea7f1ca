use serde::{Deserialize, Serialize};

/// Kind of inventory transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Purchase, stock goes up
    In,
    /// Sale, stock goes down
    Out,
    /// Manual correction, signed quantity
    Adjust,
    #[serde(other)]
    Unknown,
}

impl Default for MovementType {
    fn default() -> Self {
        MovementType::In
    }
}

impl MovementType {
    pub fn code(&self) -> &'static str {
        match self {
            MovementType::In => "IN",
            MovementType::Out => "OUT",
            MovementType::Adjust => "ADJUST",
            MovementType::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MovementType::In => "Entrada",
            MovementType::Out => "Saída",
            MovementType::Adjust => "Ajuste",
            MovementType::Unknown => "Desconhecido",
        }
    }

    /// Longer label used by the movement form toggle
    pub fn form_label(&self) -> &'static str {
        match self {
            MovementType::In => "Entrada (Compra)",
            MovementType::Out => "Saída (Venda)",
            MovementType::Adjust => "Ajuste",
            MovementType::Unknown => "Desconhecido",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MovementType::In => "in",
            MovementType::Out => "out",
            MovementType::Adjust => "adjust",
            MovementType::Unknown => "unknown",
        }
    }

    /// Types a user can register
    pub fn all() -> Vec<MovementType> {
        vec![MovementType::In, MovementType::Out, MovementType::Adjust]
    }
}

/// Processing result of an audited movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementStatus {
    Processed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl Default for MovementStatus {
    fn default() -> Self {
        MovementStatus::Unknown
    }
}

impl MovementStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            MovementStatus::Processed => "Sucesso",
            _ => "Falha",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MovementStatus::Processed => "processed",
            MovementStatus::Failed => "failed",
            MovementStatus::Unknown => "unknown",
        }
    }
}
