use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_predict_price::{PredictPrice, PricePrediction, PricePredictionRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::toast::use_toast;

fn format_estimate(value: f64, currency: Option<&str>) -> String {
    format!("{}{:.2}", currency.unwrap_or("$"), value)
}

pub fn prediction_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } => format!("Erro na IA: {}", message),
        _ => "Erro ao conectar com o servidor de preços".to_string(),
    }
}

/// Rarity and subtype inputs with the min/fair/max estimate
#[component]
pub fn PricePredictionPanel(
    /// Prefills the rarity, e.g. from the card form
    #[prop(into)]
    rarity: Signal<String>,
) -> impl IntoView {
    let toast = use_toast();
    let raridade = RwSignal::new(String::new());
    let sub_tipo = RwSignal::new(String::new());
    let result = RwSignal::new(None::<PricePrediction>);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let value = rarity.get();
        if !value.is_empty() {
            raridade.set(value);
        }
    });

    let predict = move || {
        let request = PricePredictionRequest {
            raridade: raridade.get_untracked().trim().to_string(),
            sub_tipo: sub_tipo.get_untracked().trim().to_string(),
        };
        let errors = request.validate();
        if !errors.is_empty() {
            toast.errors(&errors);
            return;
        }
        set_loading.set(true);
        result.set(None);
        spawn_local(async move {
            match api::predict_price(&request).await {
                Ok(prediction) => result.set(Some(prediction)),
                Err(e) => {
                    log::error!("Erro na previsão de preço: {}", e);
                    toast.error(prediction_error_message(&e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="price-prediction">
            <h3 class="price-prediction__title">{PredictPrice::display_name()}</h3>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Raridade"</label>
                    <input
                        class="form__input"
                        prop:value=move || raridade.get()
                        on:input=move |ev| raridade.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Subtipo"</label>
                    <input
                        class="form__input"
                        placeholder="Ex.: Pokemon, Trainer"
                        prop:value=move || sub_tipo.get()
                        on:input=move |ev| sub_tipo.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| predict()
                disabled=Signal::derive(move || loading.get())
            >
                {move || if loading.get() { "Consultando..." } else { "Calcular preço" }}
            </Button>

            {move || result.get().map(|p| {
                let currency = p.currency.clone();
                view! {
                    <div class="price-prediction__result">
                        <div class="price-prediction__value price-prediction__value--min">
                            <small>"Mínimo"</small>
                            <strong>{format_estimate(p.min_price, currency.as_deref())}</strong>
                        </div>
                        <div class="price-prediction__value price-prediction__value--fair">
                            <small>"Médio"</small>
                            <strong>{format_estimate(p.fair_price, currency.as_deref())}</strong>
                        </div>
                        <div class="price-prediction__value price-prediction__value--max">
                            <small>"Máximo"</small>
                            <strong>{format_estimate(p.max_price, currency.as_deref())}</strong>
                        </div>
                        <p class="price-prediction__note">"Baseado em dados de mercado."</p>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_uses_currency_prefix() {
        assert_eq!(format_estimate(2.0, None), "$2.00");
        assert_eq!(format_estimate(12.5, Some("R$ ")), "R$ 12.50");
    }

    #[test]
    fn test_error_message_carries_detail() {
        let err = ApiError::Http { status: 422, message: "Raridade desconhecida".into() };
        assert_eq!(prediction_error_message(&err), "Erro na IA: Raridade desconhecida");
        assert_eq!(
            prediction_error_message(&ApiError::Network("x".into())),
            "Erro ao conectar com o servidor de preços"
        );
    }
}
