use serde::{Deserialize, Serialize};

use crate::enums::MovementType;

/// Raw values of the movement form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementForm {
    pub product_id: String,
    pub quantity: i64,
    pub movement_type: MovementType,
    pub description: String,
    pub unit_purchase_price: Option<f64>,
    pub unit_sale_price: Option<f64>,
}

/// Body of `POST /inventory-movements`
///
/// IN and OUT always carry a positive quantity, the direction is given by
/// `type`. ADJUST carries the signed correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMovementRequest {
    pub product_id: String,
    pub user_id: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_sale_price: Option<f64>,
}

fn positive(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p > 0.0)
}

impl CreateMovementRequest {
    /// Validates the form and builds the request; `user_id` falls back to
    /// `"unknown"` when there is no session
    pub fn from_form(form: &MovementForm, user_id: Option<&str>) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if form.product_id.trim().is_empty() {
            errors.push("Produto é obrigatório".to_string());
        }

        let mut unit_purchase_price = None;
        let mut unit_sale_price = None;
        let quantity = match form.movement_type {
            MovementType::In => {
                unit_purchase_price = positive(form.unit_purchase_price);
                if unit_purchase_price.is_none() {
                    errors.push("Preço de compra é obrigatório para entradas".to_string());
                }
                unit_sale_price = positive(form.unit_sale_price);
                form.quantity.abs()
            }
            MovementType::Out => {
                unit_sale_price = positive(form.unit_sale_price);
                if unit_sale_price.is_none() {
                    errors.push("Preço de venda é obrigatório para saídas".to_string());
                }
                form.quantity.abs()
            }
            MovementType::Adjust => form.quantity,
            MovementType::Unknown => {
                errors.push("Tipo de movimentação inválido".to_string());
                form.quantity
            }
        };

        if quantity == 0 {
            errors.push(match form.movement_type {
                MovementType::Adjust => "Quantidade do ajuste não pode ser zero".to_string(),
                _ => "Quantidade deve ser maior que zero".to_string(),
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            product_id: form.product_id.trim().to_string(),
            user_id: user_id
                .filter(|u| !u.is_empty())
                .unwrap_or("unknown")
                .to_string(),
            quantity,
            movement_type: form.movement_type,
            description: form.description.trim().to_string(),
            unit_purchase_price,
            unit_sale_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(movement_type: MovementType, quantity: i64) -> MovementForm {
        MovementForm {
            product_id: "p-1".into(),
            quantity,
            movement_type,
            description: "Compra do fornecedor".into(),
            unit_purchase_price: Some(12.5),
            unit_sale_price: Some(20.0),
        }
    }

    #[test]
    fn test_out_is_sent_positive() {
        let req = CreateMovementRequest::from_form(&form(MovementType::Out, -3), Some("u-1")).unwrap();
        assert_eq!(req.quantity, 3);
        assert_eq!(req.unit_purchase_price, None);
        assert_eq!(req.unit_sale_price, Some(20.0));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["type"], "OUT");
        assert!(body.get("unit_purchase_price").is_none());
    }

    #[test]
    fn test_adjust_keeps_sign() {
        let req = CreateMovementRequest::from_form(&form(MovementType::Adjust, -4), None).unwrap();
        assert_eq!(req.quantity, -4);
        assert_eq!(req.user_id, "unknown");
        assert_eq!(req.unit_sale_price, None);
    }

    #[test]
    fn test_price_rules() {
        let mut f = form(MovementType::In, 10);
        f.unit_purchase_price = Some(0.0);
        assert_eq!(
            CreateMovementRequest::from_form(&f, None).unwrap_err(),
            vec!["Preço de compra é obrigatório para entradas".to_string()]
        );

        let mut f = form(MovementType::Out, 1);
        f.unit_sale_price = None;
        assert_eq!(
            CreateMovementRequest::from_form(&f, None).unwrap_err(),
            vec!["Preço de venda é obrigatório para saídas".to_string()]
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let errors = CreateMovementRequest::from_form(&form(MovementType::Adjust, 0), None).unwrap_err();
        assert_eq!(errors, vec!["Quantidade do ajuste não pode ser zero".to_string()]);
        let errors = CreateMovementRequest::from_form(&form(MovementType::In, 0), None).unwrap_err();
        assert_eq!(errors, vec!["Quantidade deve ser maior que zero".to_string()]);
    }
}
