use super::view_model::UserFormViewModel;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_store::Store;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserForm(
    vm: UserFormViewModel,
    #[prop(into)] stores: Signal<Vec<Store>>,
    on_saved: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let toast = use_toast();
    let (auth_state, _) = use_auth();
    let roles = Memo::new(move |_| auth_state.with(|s| s.permissions().assignable_roles()));

    view! {
        <div class="details-section">
            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Nome *"</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Email *"</label>
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <Show when=move || !vm.is_edit_mode()>
                    <div class="form__group">
                        <label class="form__label">"Senha *"</label>
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || vm.form.get().password
                            on:input=move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                </Show>
                <div class="form__group">
                    <label class="form__label">"Função *"</label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            roles.track();
                            vm.form.get().role_name
                        }
                        on:change=move |ev| vm.form.update(|f| f.role_name = event_target_value(&ev))
                    >
                        {move || roles.get().into_iter().map(|r| view! {
                            <option value=r.code()>{r.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Loja"</label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            stores.track();
                            vm.form.get().store_id.unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.store_id = Some(value).filter(|v| !v.is_empty()));
                        }
                    >
                        <option value="">"Nenhuma"</option>
                        {move || stores.get().into_iter().map(|s| view! {
                            <option value=s.id.clone()>{s.name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(toast, auth_state.get_untracked().permissions(), on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || match (vm.saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Salvando...",
                        (false, true) => "Salvar",
                        (false, false) => "Cadastrar usuário",
                    }}
                </Button>
                {on_cancel.map(|cancel| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| cancel.run(())>
                        "Cancelar"
                    </Button>
                })}
            </Flex>
        </div>
    }
}
