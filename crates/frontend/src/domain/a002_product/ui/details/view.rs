use super::view_model::ProductRegistrationViewModel;
use crate::domain::a001_store::api as store_api;
use crate::domain::a002_product::ui::edit::optional_input;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::use_toast;
use crate::usecases::u501_scan_card::ScanCardInput;
use crate::usecases::u502_predict_price::PricePredictionPanel;
use contracts::domain::a001_store::Store;
use contracts::domain::a002_product::{CreateProductRequest, OtherProductDto};
use contracts::enums::{CardCondition, ProductType};
use contracts::usecases::u501_scan_card::CardMatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn other_input(
    label: &'static str,
    signal: RwSignal<OtherProductDto>,
    get: fn(&OtherProductDto) -> &str,
    set: fn(&mut OtherProductDto, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || signal.with(|v| get(v).to_string())
                on:input=move |ev| signal.update(|v| set(v, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ProductRegistration(on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let vm = ProductRegistrationViewModel::new();
    let (stores, set_stores) = signal::<Vec<Store>>(Vec::new());

    spawn_local(async move {
        match store_api::fetch_stores().await {
            Ok(v) => set_stores.set(v),
            Err(e) => {
                log::error!("Erro ao carregar lojas: {}", e);
                toast.error("Erro ao carregar lojas");
            }
        }
    });

    let form = vm.form;
    let rarity = Signal::derive(move || form.with(|f| f.rarity.clone().unwrap_or_default()));

    view! {
        <PageFrame page_id="a002_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cadastro de Produto"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="details-section">
                    <div class="details-grid--3col">
                        <div class="form__group">
                            <label class="form__label">"Nome *"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Tipo *"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.get().product_type.map(|t| t.code()).unwrap_or_default()
                                on:change=move |ev| vm.set_type(ProductType::from_code(&event_target_value(&ev)))
                            >
                                <option value="">"Selecione..."</option>
                                {ProductType::all().into_iter().map(|t| view! {
                                    <option value=t.code()>{t.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Preço (R$) *"</label>
                            <input
                                class="form__input"
                                type="text"
                                inputmode="decimal"
                                placeholder="0,00"
                                prop:value=move || vm.price_text.get()
                                on:input=move |ev| vm.price_text.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Condição *"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.get().condition.map(|c| c.code()).unwrap_or_default()
                                on:change=move |ev| form.update(|f| f.condition = CardCondition::from_code(&event_target_value(&ev)))
                            >
                                {CardCondition::all().into_iter().map(|c| view! {
                                    <option value=c.code()>{c.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Loja de destino *"</label>
                            <select
                                class="form__select"
                                prop:value=move || {
                                    stores.track();
                                    form.get().store_id
                                }
                                on:change=move |ev| vm.set_store(event_target_value(&ev))
                            >
                                {move || stores.get().into_iter().map(|s| view! {
                                    <option value=s.id.clone()>{s.name.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <Show when=move || vm.is_secondary_store()>
                            <div class="form__group">
                                <label class="form__label">"ID do produto existente *"</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || form.get().product_id.unwrap_or_default()
                                    on:input=move |ev| form.update(|f| f.product_id = Some(event_target_value(&ev)))
                                />
                            </div>
                        </Show>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Descrição"</label>
                        <textarea
                            class="form__input"
                            rows="3"
                            prop:value=move || form.get().description.unwrap_or_default()
                            on:input=move |ev| form.update(|f| f.description = Some(event_target_value(&ev)))
                        ></textarea>
                    </div>
                </div>

                <Show when=move || vm.product_type() == Some(ProductType::Card)>
                    <div class="details-section">
                        <h3 class="details-section__title">"Dados da carta"</h3>
                        <ScanCardInput on_scanned=Callback::new(move |card: CardMatch| vm.apply_scan(card)) />
                        <div class="details-grid--3col">
                            {optional_input::<CreateProductRequest>("Título *", form, |f| f.title.clone(), |f, v| f.title = Some(v))}
                            {optional_input::<CreateProductRequest>("Temporada", form, |f| f.season.clone(), |f, v| f.season = Some(v))}
                            {optional_input::<CreateProductRequest>("Tipo de Pokémon", form, |f| f.pokemon_type.clone(), |f, v| f.pokemon_type = Some(v))}
                            {optional_input::<CreateProductRequest>("Coleção", form, |f| f.collection_id.clone(), |f, v| f.collection_id = Some(v))}
                            {optional_input::<CreateProductRequest>("Código", form, |f| f.code.clone(), |f, v| f.code = Some(v))}
                            {optional_input::<CreateProductRequest>("Raridade", form, |f| f.rarity.clone(), |f, v| f.rarity = Some(v))}
                            {optional_input::<CreateProductRequest>("Nacionalidade", form, |f| f.nationality.clone(), |f, v| f.nationality = Some(v))}
                        </div>
                        <PricePredictionPanel rarity=rarity />
                    </div>
                </Show>

                <Show when=move || vm.product_type().is_some_and(|t| t.is_other_product())>
                    <div class="details-section">
                        <h3 class="details-section__title">"Dados do produto"</h3>
                        <div class="details-grid--3col">
                            {other_input("Nacionalidade", vm.other, |o| o.nationality.as_str(), |o, v| o.nationality = v)}
                            {other_input("Conteúdo da embalagem", vm.other, |o| o.package_contents.as_str(), |o, v| o.package_contents = v)}
                            {other_input("Informações extras", vm.other, |o| o.extra_info.as_str(), |o, v| o.extra_info = v)}
                        </div>
                    </div>
                </Show>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.submit_command(toast)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        {move || if vm.saving.get() { "Salvando..." } else { "Cadastrar produto" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reset()>
                        "Limpar"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        "Fechar"
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}
