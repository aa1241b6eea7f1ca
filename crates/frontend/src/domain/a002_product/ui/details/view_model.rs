use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::edit::parse_price;
use crate::shared::api_utils::ApiError;
use crate::shared::config::config;
use crate::shared::toast::ToastService;
use contracts::domain::a002_product::{CreateProductRequest, OtherProductDto};
use contracts::enums::{CardCondition, ProductType};
use contracts::usecases::u501_scan_card::CardMatch;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn empty_form(main_store_id: &str) -> CreateProductRequest {
    CreateProductRequest {
        condition: Some(CardCondition::Mint),
        store_id: main_store_id.to_string(),
        ..Default::default()
    }
}

/// Copies the scan result into the card fields; missing values clear them
pub fn apply_scan(form: &mut CreateProductRequest, card: CardMatch) {
    form.title = Some(card.title.unwrap_or_default());
    form.season = Some(card.season.unwrap_or_default());
    form.pokemon_type = Some(card.pokemon_type.unwrap_or_default());
    form.collection_id = Some(card.collection_abbreviation.unwrap_or_default());
    form.code = Some(card.code.unwrap_or_default());
    form.rarity = Some(card.rarity.unwrap_or_default());
    form.nationality = Some(card.nationality.unwrap_or_default());
}

/// Request body as it will be sent
pub fn build_request(
    form: CreateProductRequest,
    price_text: &str,
    other: OtherProductDto,
    main_store_id: &str,
) -> CreateProductRequest {
    let mut request = form;
    request.price = parse_price(price_text);
    if request.product_type.is_some_and(|t| t.is_other_product()) {
        request.other_product = Some(OtherProductDto {
            nationality: other.nationality.trim().to_string(),
            package_contents: other.package_contents.trim().to_string(),
            extra_info: other.extra_info.trim().to_string(),
            ..other
        });
    }
    request.normalized(main_store_id)
}

pub fn submit_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } => format!("Erro ao cadastrar produto: {}", message),
        _ => "Erro de conexão com o servidor. Tente novamente.".to_string(),
    }
}

#[derive(Clone, Copy)]
pub struct ProductRegistrationViewModel {
    pub form: RwSignal<CreateProductRequest>,
    pub price_text: RwSignal<String>,
    pub other: RwSignal<OtherProductDto>,
    pub saving: RwSignal<bool>,
}

impl ProductRegistrationViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(empty_form(&config().ui.main_store_id)),
            price_text: RwSignal::new(String::new()),
            other: RwSignal::new(OtherProductDto::default()),
            saving: RwSignal::new(false),
        }
    }

    pub fn product_type(&self) -> Option<ProductType> {
        self.form.with(|f| f.product_type)
    }

    pub fn is_secondary_store(&self) -> bool {
        self.form
            .with(|f| !f.store_id.is_empty() && f.store_id != config().ui.main_store_id)
    }

    /// Switching type wipes the fields of the previous type
    pub fn set_type(&self, product_type: Option<ProductType>) {
        self.form.update(|f| {
            f.product_type = product_type;
            f.title = None;
            f.season = None;
            f.pokemon_type = None;
            f.collection_id = None;
            f.code = None;
            f.rarity = None;
            f.nationality = None;
            f.other_product = None;
        });
        self.other.set(OtherProductDto {
            product_type: product_type.unwrap_or_default(),
            ..Default::default()
        });
    }

    /// Choosing the main store drops the product link
    pub fn set_store(&self, store_id: String) {
        let main = config().ui.main_store_id.clone();
        self.form.update(|f| {
            if store_id == main {
                f.product_id = None;
            }
            f.store_id = store_id;
        });
    }

    pub fn apply_scan(&self, card: CardMatch) {
        self.form.update(|f| apply_scan(f, card));
    }

    pub fn reset(&self) {
        self.form.set(empty_form(&config().ui.main_store_id));
        self.price_text.set(String::new());
        self.other.set(OtherProductDto::default());
    }

    pub fn submit_command(&self, toast: ToastService) {
        let main_store_id = config().ui.main_store_id.clone();
        let request = build_request(
            self.form.get_untracked(),
            &self.price_text.get_untracked(),
            self.other.get_untracked(),
            &main_store_id,
        );

        let errors = request.validate(&main_store_id);
        if !errors.is_empty() {
            toast.errors(&errors);
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            log::debug!("Enviando produto: {:?}", request);
            match api::create_product(&request).await {
                Ok(_) => {
                    toast.success("Produto cadastrado com sucesso!");
                    this.reset();
                }
                Err(e) => {
                    log::error!("Erro ao cadastrar produto: {}", e);
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

    const MAIN: &str = "main-store";

    #[test]
    fn test_scan_prefill_clears_missing_fields() {
        let mut form = empty_form(MAIN);
        form.season = Some("Escarlate".into());
        apply_scan(
            &mut form,
            CardMatch {
                title: Some("Mew ex".into()),
                collection_abbreviation: Some("MEW".into()),
                ..Default::default()
            },
        );
        assert_eq!(form.title.as_deref(), Some("Mew ex"));
        assert_eq!(form.collection_id.as_deref(), Some("MEW"));
        assert_eq!(form.season.as_deref(), Some(""));
    }

    #[test]
    fn test_other_product_block_is_built_from_form() {
        let form = CreateProductRequest {
            name: " Booster ".into(),
            product_type: Some(ProductType::BoosterBox),
            ..empty_form(MAIN)
        };
        let other = OtherProductDto {
            product_type: ProductType::BoosterBox,
            nationality: " JP ".into(),
            ..Default::default()
        };
        let request = build_request(form, "129,90", other, MAIN);
        assert_eq!(request.name, "Booster");
        assert_eq!(request.price, 129.9);
        let block = request.other_product.unwrap();
        assert_eq!(block.product_type, ProductType::BoosterBox);
        assert_eq!(block.nationality, "JP");
        assert!(request.title.is_none());
    }

    #[test]
    fn test_secondary_store_requires_product_link() {
        let form = CreateProductRequest {
            name: "Pikachu".into(),
            product_type: Some(ProductType::Card),
            title: Some("Pikachu V".into()),
            store_id: "other-store".into(),
            ..empty_form(MAIN)
        };
        let request = build_request(form, "10", OtherProductDto::default(), MAIN);
        assert_eq!(
            request.validate(MAIN),
            vec!["ID do produto existente é obrigatório para lojas secundárias".to_string()]
        );
    }

    #[test]
    fn test_submit_error_message() {
        let err = ApiError::Http { status: 400, message: "Loja inválida".into() };
        assert_eq!(submit_error_message(&err), "Erro ao cadastrar produto: Loja inválida");
        assert_eq!(
            submit_error_message(&ApiError::Parse("x".into())),
            "Erro de conexão com o servidor. Tente novamente."
        );
    }
}
