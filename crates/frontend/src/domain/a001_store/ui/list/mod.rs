use crate::domain::a001_store::api;
use crate::domain::a001_store::ui::details::{StoreForm, StoreFormViewModel};
use crate::shared::components::modal::ConfirmDialog;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a001_store::{format_cep, Store};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn StoreList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<Store>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let create_vm = StoreFormViewModel::new();
    let edit_vm = StoreFormViewModel::new();
    let edit_open = RwSignal::new(false);

    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<(String, String)>);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_stores().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Erro ao carregar lojas: {}", e);
                    toast.error(format!("Erro ao carregar lojas: {}", e));
                    set_error.set(Some("Erro ao carregar lojas".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let on_created = Callback::new(move |_| {
        create_vm.reset();
        fetch();
    });
    let on_edited = Callback::new(move |_| {
        edit_open.set(false);
        edit_vm.reset();
        fetch();
    });
    let on_edit_cancel = Callback::new(move |_| {
        edit_open.set(false);
        edit_vm.reset();
    });

    let open_edit = move |store: Store| {
        edit_vm.edit(&store);
        edit_open.set(true);
    };

    let open_delete = move |id: String, name: String| {
        delete_target.set(Some((id, name)));
        delete_open.set(true);
    };

    let confirm_delete = Callback::new(move |_| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_store(&id).await {
                Ok(()) => {
                    toast.success("Loja excluída com sucesso!");
                    fetch();
                }
                Err(e) => {
                    log::error!("Erro ao excluir loja: {}", e);
                    toast.error(format!("Erro ao excluir loja: {}", e));
                }
            }
            delete_target.set(None);
        });
    });

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map(|(_, name)| format!("Tem certeza que deseja excluir a loja \"{}\"?", name))
            .unwrap_or_default()
    });

    fetch();

    view! {
        <PageFrame page_id="a001_store--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lojas"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <h2 class="details-section__title">"Nova loja"</h2>
                <StoreForm vm=create_vm on_saved=on_created />

                <h2 class="details-section__title">"Lojas cadastradas"</h2>
                {move || {
                    if loading.get() && items.with(|v| v.is_empty()) {
                        return view! { <div class="loading-state"><Spinner /> " Carregando lojas..."</div> }.into_any();
                    }
                    if let Some(e) = error.get() {
                        return view! { <div class="alert alert--error">{e}</div> }.into_any();
                    }
                    if items.with(|v| v.is_empty()) {
                        return view! { <div class="empty-state">"Nenhuma loja cadastrada"</div> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || items.get()
                                key=|store| store.id.clone()
                                children=move |store: Store| {
                                    let for_edit = store.clone();
                                    let id = store.id.clone();
                                    let name = store.name.clone();
                                    view! {
                                        <div class="movement-item">
                                            <h3>{store.name.clone()}</h3>
                                            <p><strong>"CEP: "</strong>{format_cep(&store.cep)}</p>
                                            <p><strong>"Número: "</strong>{store.number.clone()}</p>
                                            <p>
                                                <strong>"Complemento: "</strong>
                                                {store.complement.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "-".to_string())}
                                            </p>
                                            {store.created_at.clone().map(|c| view! {
                                                <p><strong>"Cadastrado em: "</strong>{format_date(&c)}</p>
                                            })}
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    on_click=move |_| open_edit(for_edit.clone())
                                                >
                                                    {icon("edit")}
                                                    " Editar"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_delete(id.clone(), name.clone())
                                                >
                                                    {icon("trash")}
                                                    " Excluir"
                                                </Button>
                                            </Flex>
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
                        <DialogTitle>"Editar loja"</DialogTitle>
                        <DialogContent>
                            <StoreForm vm=edit_vm on_saved=on_edited on_cancel=on_edit_cancel />
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="Excluir loja"
                message=delete_message
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
