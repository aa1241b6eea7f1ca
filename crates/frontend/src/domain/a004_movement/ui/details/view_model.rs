use crate::domain::a002_product::ui::edit::parse_price;
use crate::domain::a004_movement::api;
use crate::shared::api_utils::ApiError;
use crate::shared::toast::ToastService;
use contracts::domain::a004_movement::{CreateMovementRequest, MovementForm};
use contracts::enums::MovementType;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Blank or malformed prices count as missing
fn optional_price(text: &str) -> Option<f64> {
    let value = parse_price(text);
    (!value.is_nan()).then_some(value)
}

/// `+5` and `-3` are accepted; anything unparsable is zero and fails validation
pub fn parse_quantity(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

pub fn quantity_placeholder(movement_type: MovementType) -> &'static str {
    match movement_type {
        MovementType::Out => "Ex: 5",
        MovementType::Adjust => "Ex: +5 ou -3",
        _ => "Ex: 10",
    }
}

pub fn submit_error_message(err: &ApiError) -> String {
    format!("Erro ao registrar movimentação: {}", err)
}

#[derive(Clone, Copy)]
pub struct MovementFormViewModel {
    pub movement_type: RwSignal<MovementType>,
    pub product_id: RwSignal<String>,
    pub quantity_text: RwSignal<String>,
    pub description: RwSignal<String>,
    pub purchase_price_text: RwSignal<String>,
    pub sale_price_text: RwSignal<String>,
    pub saving: RwSignal<bool>,
}

impl MovementFormViewModel {
    pub fn new() -> Self {
        Self {
            movement_type: RwSignal::new(MovementType::In),
            product_id: RwSignal::new(String::new()),
            quantity_text: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            purchase_price_text: RwSignal::new(String::new()),
            sale_price_text: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
        }
    }

    /// Price fields of the other types are dropped
    pub fn set_type(&self, movement_type: MovementType) {
        self.movement_type.set(movement_type);
        self.purchase_price_text.set(String::new());
        self.sale_price_text.set(String::new());
    }

    pub fn reset(&self) {
        self.set_type(MovementType::In);
        self.product_id.set(String::new());
        self.quantity_text.set(String::new());
        self.description.set(String::new());
    }

    pub fn to_form(&self) -> MovementForm {
        MovementForm {
            product_id: self.product_id.get_untracked(),
            quantity: parse_quantity(&self.quantity_text.get_untracked()),
            movement_type: self.movement_type.get_untracked(),
            description: self.description.get_untracked(),
            unit_purchase_price: optional_price(&self.purchase_price_text.get_untracked()),
            unit_sale_price: optional_price(&self.sale_price_text.get_untracked()),
        }
    }

    pub fn submit_command(&self, toast: ToastService, user_id: Option<String>, on_saved: Callback<()>) {
        let request = match CreateMovementRequest::from_form(&self.to_form(), user_id.as_deref()) {
            Ok(request) => request,
            Err(errors) => {
                toast.errors(&errors);
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match api::create_movement(&request).await {
                Ok(_) => {
                    toast.success("Movimentação registrada com sucesso!");
                    this.reset();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Erro ao criar movimentação: {}", e);
                    toast.error(submit_error_message(&e));
                }
            }
            this.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_accepts_signs() {
        assert_eq!(parse_quantity("+5"), 5);
        assert_eq!(parse_quantity(" -3 "), -3);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
    }

    #[test]
    fn test_optional_price() {
        assert_eq!(optional_price("12,50"), Some(12.5));
        assert_eq!(optional_price(""), None);
    }

    #[test]
    fn test_placeholder_follows_type() {
        assert_eq!(quantity_placeholder(MovementType::Adjust), "Ex: +5 ou -3");
        assert_eq!(quantity_placeholder(MovementType::In), "Ex: 10");
    }
}
