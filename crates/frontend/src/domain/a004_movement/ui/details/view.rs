use super::view_model::{quantity_placeholder, MovementFormViewModel};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use contracts::domain::a002_product::Product;
use contracts::enums::MovementType;
use leptos::prelude::*;
use thaw::*;

fn price_input(label: &'static str, signal: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                inputmode="decimal"
                placeholder="0,00"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn MovementFormView(
    vm: MovementFormViewModel,
    #[prop(into)] products: Signal<Vec<Product>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let (auth_state, _) = use_auth();

    view! {
        <div class="details-section movement-form">
            <h3 class="details-section__title">"Nova movimentação"</h3>

            <div class="type-toggle">
                {MovementType::all().into_iter().map(|t| view! {
                    <button
                        type="button"
                        class="toggle-option"
                        class:active=move || vm.movement_type.get() == t
                        on:click=move |_| vm.set_type(t)
                    >
                        {t.form_label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Produto *"</label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            products.track();
                            vm.product_id.get()
                        }
                        on:change=move |ev| vm.product_id.set(event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {move || products.get().into_iter().map(|p| view! {
                            <option value=p.id.clone()>{p.name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Quantidade *"</label>
                    <input
                        class="form__input"
                        type="text"
                        inputmode="numeric"
                        placeholder=move || quantity_placeholder(vm.movement_type.get())
                        prop:value=move || vm.quantity_text.get()
                        on:input=move |ev| vm.quantity_text.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || vm.movement_type.get() == MovementType::In>
                    {price_input("Preço unitário de compra *", vm.purchase_price_text)}
                    {price_input("Preço unitário de venda", vm.sale_price_text)}
                </Show>
                <Show when=move || vm.movement_type.get() == MovementType::Out>
                    {price_input("Preço unitário de venda *", vm.sale_price_text)}
                </Show>
            </div>

            <Show when=move || vm.movement_type.get() == MovementType::Adjust>
                <p class="form__hint">"Use valores positivos para acrescentar e negativos para retirar do estoque."</p>
            </Show>

            <div class="form__group">
                <label class="form__label">"Descrição"</label>
                <textarea
                    class="form__input"
                    rows="2"
                    prop:value=move || vm.description.get()
                    on:input=move |ev| vm.description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.submit_command(toast, auth_state.get_untracked().user_id(), on_saved)
                disabled=Signal::derive(move || vm.saving.get())
            >
                {move || if vm.saving.get() { "Registrando..." } else { "Registrar movimentação" }}
            </Button>
        </div>
    }
}
