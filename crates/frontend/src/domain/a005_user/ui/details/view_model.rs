use crate::domain::a005_user::api;
use crate::shared::toast::ToastService;
use contracts::domain::a005_user::{CreateUserDto, Permissions, UpdateUserDto, User};
use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shared by the create form and the edit dialog; the password only
/// matters when creating
#[derive(Clone, Copy)]
pub struct UserFormViewModel {
    pub form: RwSignal<CreateUserDto>,
    pub editing_id: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

fn empty_form() -> CreateUserDto {
    CreateUserDto {
        role_name: UserRole::Staff.code().to_string(),
        ..Default::default()
    }
}

fn trimmed(form: CreateUserDto) -> CreateUserDto {
    CreateUserDto {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password,
        role_name: form.role_name,
        store_id: form.store_id.filter(|s| !s.trim().is_empty()),
    }
}

impl UserFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(empty_form()),
            editing_id: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.get().is_some()
    }

    pub fn edit(&self, user: &User) {
        self.form.set(CreateUserDto {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role_name: user.role_name.clone(),
            store_id: user.store_id.clone(),
        });
        self.editing_id.set(Some(user.id.clone()));
    }

    pub fn reset(&self) {
        self.form.set(empty_form());
        self.editing_id.set(None);
    }

    pub fn save_command(&self, toast: ToastService, permissions: Permissions, on_saved: Callback<()>) {
        let form = trimmed(self.form.get_untracked());
        let editing_id = self.editing_id.get_untracked();

        let errors = match &editing_id {
            Some(_) => UpdateUserDto {
                name: form.name.clone(),
                email: form.email.clone(),
                role_name: form.role_name.clone(),
                store_id: form.store_id.clone(),
            }
            .validate(),
            None => form.validate(),
        };
        if !errors.is_empty() {
            toast.errors(&errors);
            return;
        }
        if let Err(msg) = permissions.check_assign(&form.role_name) {
            toast.error(msg);
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match editing_id {
                Some(id) => {
                    let dto = UpdateUserDto {
                        name: form.name,
                        email: form.email,
                        role_name: form.role_name,
                        store_id: form.store_id,
                    };
                    match api::update_user(&id, &dto).await {
                        Ok(_) => {
                            toast.success("Usuário atualizado com sucesso!");
                            this.reset();
                            on_saved.run(());
                        }
                        Err(e) => {
                            log::error!("Erro ao atualizar usuário {}: {}", id, e);
                            toast.error(format!("Falha ao atualizar usuário: {}", e));
                        }
                    }
                }
                None => match api::create_user(&form).await {
                    Ok(user) => {
                        let name = if user.name.is_empty() { form.name } else { user.name };
                        toast.success(format!("Usuário {} cadastrado com sucesso!", name));
                        this.reset();
                        on_saved.run(());
                    }
                    Err(e) => {
                        log::error!("Erro ao cadastrar usuário: {}", e);
                        toast.error(format!("Falha ao cadastrar usuário: {}", e));
                    }
                },
            }
            this.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_drops_blank_store() {
        let form = trimmed(CreateUserDto {
            name: " Ana ".into(),
            email: " ana@loja.com ".into(),
            password: " segredo ".into(),
            role_name: "staff".into(),
            store_id: Some("  ".into()),
        });
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@loja.com");
        assert_eq!(form.password, " segredo ");
        assert_eq!(form.store_id, None);
    }

    #[test]
    fn test_new_users_default_to_staff() {
        assert_eq!(empty_form().role_name, "staff");
    }
}
