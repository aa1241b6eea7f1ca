use crate::domain::a001_store::api as store_api;
use crate::domain::a005_user::api;
use crate::domain::a005_user::ui::details::{UserForm, UserFormViewModel};
use crate::shared::components::modal::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_store::Store;
use contracts::domain::a005_user::{active_users, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let toast = use_toast();
    let (auth_state, _) = use_auth();
    let permissions = Memo::new(move |_| auth_state.with(|s| s.permissions()));

    let (items, set_items) = signal::<Vec<User>>(Vec::new());
    let (stores, set_stores) = signal::<Vec<Store>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let create_vm = UserFormViewModel::new();
    let edit_vm = UserFormViewModel::new();
    let edit_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<User>);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(v) => {
                    set_items.set(active_users(v));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Erro ao buscar usuários: {}", e);
                    toast.error("Erro ao carregar usuários.");
                    set_error.set(Some("Não foi possível carregar a lista de usuários.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    spawn_local(async move {
        match store_api::fetch_stores().await {
            Ok(v) => set_stores.set(v),
            Err(e) => log::error!("Erro ao carregar lojas: {}", e),
        }
    });

    let on_created = Callback::new(move |_| fetch());
    let on_edited = Callback::new(move |_| {
        edit_open.set(false);
        fetch();
    });
    let on_edit_cancel = Callback::new(move |_| {
        edit_open.set(false);
        edit_vm.reset();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(user) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(&user.id).await {
                Ok(()) => {
                    toast.success("Usuário excluído com sucesso!");
                    fetch();
                }
                Err(e) => {
                    log::error!("Erro ao excluir usuário {}: {}", user.id, e);
                    toast.error(format!("Falha ao excluir usuário: {}", e));
                }
            }
            delete_target.set(None);
        });
    });

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map(|u| format!("Tem certeza que deseja excluir o usuário \"{}\"?", u.name))
            .unwrap_or_default()
    });

    fetch();

    view! {
        <PageFrame page_id="a005_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuários"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || permissions.get().can_create()>
                    <h2 class="details-section__title">"Novo usuário"</h2>
                    <UserForm vm=create_vm stores=stores on_saved=on_created />
                </Show>

                <h2 class="details-section__title">"Usuários cadastrados"</h2>
                {move || {
                    if loading.get() && items.with(|v| v.is_empty()) {
                        return view! { <div class="loading-state"><Spinner /> " Carregando usuários..."</div> }.into_any();
                    }
                    if let Some(e) = error.get() {
                        return view! { <p class="error-message">{e}</p> }.into_any();
                    }
                    if items.with(|v| v.is_empty()) {
                        return view! { <div class="empty-state">"Nenhum usuário cadastrado."</div> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || items.get()
                                key=|user| user.id.clone()
                                children=move |user: User| {
                                    let can_edit = {
                                        let user = user.clone();
                                        move || permissions.get().can_edit(&user)
                                    };
                                    let can_delete = {
                                        let user = user.clone();
                                        move || permissions.get().can_delete(&user)
                                    };
                                    let for_edit = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <div class="movement-item">
                                            <div class="item-details">
                                                <span class="item-name"><b>"Nome: "</b>{user.name.clone()}</span>
                                                <span class="item-info"><b>"Email: "</b>{user.email.clone()}</span>
                                                <span class="item-info"><b>"Função: "</b>{user.role().display_name()}</span>
                                            </div>
                                            <div class="item-actions">
                                                <Show when=can_edit>
                                                    <button
                                                        class="btn btn-secondary btn-sm"
                                                        on:click={
                                                            let user = for_edit.clone();
                                                            move |_| {
                                                                edit_vm.edit(&user);
                                                                edit_open.set(true);
                                                            }
                                                        }
                                                    >
                                                        "Editar"
                                                    </button>
                                                </Show>
                                                <Show when=can_delete>
                                                    <button
                                                        class="btn btn-danger btn-sm"
                                                        on:click={
                                                            let user = for_delete.clone();
                                                            move |_| {
                                                                delete_target.set(Some(user.clone()));
                                                                delete_open.set(true);
                                                            }
                                                        }
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <Dialog open=edit_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Editar usuário"</DialogTitle>
                        <DialogContent>
                            <UserForm vm=edit_vm stores=stores on_saved=on_edited on_cancel=on_edit_cancel />
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="Excluir usuário"
                message=delete_message
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
