use crate::domain::a001_store::api;
use crate::shared::toast::ToastService;
use contracts::domain::a001_store::{sanitize_cep, Store, StoreDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct StoreFormViewModel {
    pub form: RwSignal<StoreDto>,
    /// `Some` while editing an existing store
    pub editing_id: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StoreFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StoreDto::default()),
            editing_id: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.get().is_some()
    }

    pub fn edit(&self, store: &Store) {
        self.form.set(StoreDto::from_store(store));
        self.editing_id.set(Some(store.id.clone()));
    }

    pub fn reset(&self) {
        self.form.set(StoreDto::default());
        self.editing_id.set(None);
    }

    /// Keeps only digits while typing, at most eight
    pub fn set_cep(&self, raw: &str) {
        let digits: String = sanitize_cep(raw).chars().take(8).collect();
        self.form.update(|f| f.cep = digits);
    }

    pub fn save_command(&self, toast: ToastService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let errors = current.validate();
        if !errors.is_empty() {
            toast.errors(&errors);
            return;
        }

        let id = self.editing_id.get_untracked();
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save_store(id.as_deref(), &current).await {
                Ok(()) => {
                    toast.success(if id.is_some() {
                        "Loja atualizada com sucesso!"
                    } else {
                        "Loja cadastrada com sucesso!"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Erro ao salvar loja: {}", e);
                    toast.error(format!("Erro ao salvar loja: {}", e));
                }
            }
            saving.set(false);
        });
    }
}
