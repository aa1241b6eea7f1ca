use crate::domain::a002_product::api::{self, DetailUpdate};
use crate::shared::toast::ToastService;
use contracts::domain::a002_product::{Card, OtherProduct, Product, ProductUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Accepts `12,50` as well as `12.50`; anything else is NaN and fails validation
pub fn parse_price(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Clone, Copy)]
pub struct ProductEditViewModel {
    pub original: RwSignal<Option<Product>>,
    pub form: RwSignal<ProductUpdate>,
    pub price_text: RwSignal<String>,
    pub card: RwSignal<Card>,
    pub other: RwSignal<OtherProduct>,
    pub saving: RwSignal<bool>,
}

impl ProductEditViewModel {
    pub fn new() -> Self {
        Self {
            original: RwSignal::new(None),
            form: RwSignal::new(ProductUpdate::default()),
            price_text: RwSignal::new(String::new()),
            card: RwSignal::new(Card::default()),
            other: RwSignal::new(OtherProduct::default()),
            saving: RwSignal::new(false),
        }
    }

    pub fn load(&self, product: &Product) {
        self.form.set(ProductUpdate::from_product(product));
        self.price_text.set(format!("{:.2}", product.price));
        self.card.set(product.card.clone().unwrap_or_default());
        self.other.set(product.other_product.clone().unwrap_or_default());
        self.original.set(Some(product.clone()));
    }

    pub fn is_card(&self) -> bool {
        self.original.with(|p| p.as_ref().is_some_and(|p| p.card.is_some()))
    }

    pub fn is_other_product(&self) -> bool {
        self.original
            .with(|p| p.as_ref().is_some_and(|p| p.card.is_none() && p.other_product.is_some()))
    }

    pub fn save_command(&self, toast: ToastService, on_saved: Callback<()>) {
        let Some(original) = self.original.get_untracked() else {
            toast.error("Produto não encontrado");
            return;
        };

        let mut update = self.form.get_untracked();
        update.name = update.name.trim().to_string();
        update.description = update
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        update.price = parse_price(&self.price_text.get_untracked());

        let errors = update.validate();
        if !errors.is_empty() {
            toast.errors(&errors);
            return;
        }

        let detail = DetailUpdate::for_product(
            &original,
            &self.card.get_untracked(),
            &self.other.get_untracked(),
        );

        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::update_product(&original.id, &update, &detail).await {
                Ok(()) => {
                    toast.success("Produto atualizado com sucesso!");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Erro ao atualizar produto: {}", e);
                    toast.error(format!("Erro ao atualizar produto: {}", e));
                }
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12,50"), 12.5);
        assert_eq!(parse_price(" 7.25 "), 7.25);
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("").is_nan());
    }
}
