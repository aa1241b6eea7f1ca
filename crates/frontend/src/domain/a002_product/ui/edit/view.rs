use super::view_model::ProductEditViewModel;
use crate::shared::toast::use_toast;
use contracts::domain::a001_store::Store;
use contracts::domain::a002_product::{Card, OtherProduct};
use contracts::enums::CardCondition;
use leptos::prelude::*;
use thaw::*;

/// Text input bound to an optional field of a card or other product
pub(crate) fn optional_input<T: Send + Sync + 'static>(
    label: &'static str,
    signal: RwSignal<T>,
    get: fn(&T) -> Option<String>,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || signal.with(|v| get(v).unwrap_or_default())
                on:input=move |ev| signal.update(|v| set(v, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ProductEditDialog(
    open: RwSignal<bool>,
    vm: ProductEditViewModel,
    #[prop(into)] stores: Signal<Vec<Store>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Editar produto"</DialogTitle>
                    <DialogContent>
                        <div class="details-section">
                            <div class="form__group">
                                <label class="form__label">"Nome"</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().name
                                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Descrição"</label>
                                <textarea
                                    class="form__input"
                                    rows="3"
                                    prop:value=move || vm.form.get().description.unwrap_or_default()
                                    on:input=move |ev| vm.form.update(|f| f.description = Some(event_target_value(&ev)))
                                />
                            </div>
                            <div class="details-grid--3col">
                                <div class="form__group">
                                    <label class="form__label">"Preço (R$)"</label>
                                    <input
                                        class="form__input"
                                        type="text"
                                        inputmode="decimal"
                                        prop:value=move || vm.price_text.get()
                                        on:input=move |ev| vm.price_text.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Condição"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || vm.form.get().condition.code()
                                        on:change=move |ev| {
                                            if let Some(c) = CardCondition::from_code(&event_target_value(&ev)) {
                                                vm.form.update(|f| f.condition = c);
                                            }
                                        }
                                    >
                                        {CardCondition::all().into_iter().map(|c| view! {
                                            <option value=c.code()>{c.display_name()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Loja"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || vm.form.get().store_id
                                        on:change=move |ev| vm.form.update(|f| f.store_id = event_target_value(&ev))
                                    >
                                        <option value="">"Selecione a loja"</option>
                                        {move || stores.get().into_iter().map(|s| view! {
                                            <option value=s.id.clone()>{s.name.clone()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>

                            <Show when=move || vm.is_card()>
                                <h3 class="details-section__title">"Dados da carta"</h3>
                                <div class="details-grid--3col">
                                    {optional_input::<Card>("Título", vm.card, |c| c.title.clone(), |c, v| c.title = Some(v))}
                                    {optional_input::<Card>("Código", vm.card, |c| c.code.clone(), |c, v| c.code = Some(v))}
                                    {optional_input::<Card>("Raridade", vm.card, |c| c.rarity.clone(), |c, v| c.rarity = Some(v))}
                                    {optional_input::<Card>("Tipo", vm.card, |c| c.pokemon_type.clone(), |c, v| c.pokemon_type = Some(v))}
                                    {optional_input::<Card>("Nacionalidade", vm.card, |c| c.nationality.clone(), |c, v| c.nationality = Some(v))}
                                </div>
                            </Show>

                            <Show when=move || vm.is_other_product()>
                                <h3 class="details-section__title">"Dados do produto"</h3>
                                <div class="details-grid--3col">
                                    {optional_input::<OtherProduct>("Nacionalidade", vm.other, |o| o.nationality.clone(), |o, v| o.nationality = Some(v))}
                                    {optional_input::<OtherProduct>("Conteúdo da embalagem", vm.other, |o| o.package_contents.clone(), |o, v| o.package_contents = Some(v))}
                                    {optional_input::<OtherProduct>("Informações extras", vm.other, |o| o.extra_info.clone(), |o, v| o.extra_info = Some(v))}
                                </div>
                            </Show>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(toast, on_saved)
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            "Salvar"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
