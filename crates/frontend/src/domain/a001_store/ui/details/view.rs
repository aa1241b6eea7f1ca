use super::view_model::StoreFormViewModel;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StoreForm(
    vm: StoreFormViewModel,
    on_saved: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="details-section">
            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Nome da loja"</label>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Loja Centro"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"CEP"</label>
                    <input
                        class="form__input"
                        type="text"
                        inputmode="numeric"
                        maxlength="9"
                        placeholder="00000000"
                        prop:value=move || vm.form.get().cep
                        on:input=move |ev| vm.set_cep(&event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Número"</label>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="123"
                        prop:value=move || vm.form.get().number
                        on:input=move |ev| vm.form.update(|f| f.number = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Complemento"</label>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Sala 2 (opcional)"
                        prop:value=move || vm.form.get().complement
                        on:input=move |ev| vm.form.update(|f| f.complement = event_target_value(&ev))
                    />
                </div>
            </div>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(toast, on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.is_edit_mode() { "Salvar alterações" } else { "Cadastrar loja" }}
                </Button>
                {on_cancel.map(|cancel| view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| cancel.run(())>
                        "Cancelar"
                    </Button>
                })}
            </Flex>
        </div>
    }
}
