//! Transient notifications, auto-dismissed after `ui.toast_duration_ms`

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert-circle",
            ToastKind::Warning => "alert-triangle",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        };
        let id = toast.id.clone();
        self.toasts.update(|list| list.push(toast));

        let this = *self;
        let duration = config().ui.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            this.dismiss(&id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    /// One error toast per validation message
    pub fn errors(&self, messages: &[String]) {
        for message in messages {
            self.error(message.clone());
        }
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-container">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.kind.css_class() role="alert">
                            <span class="toast__icon">{icon(toast.kind.icon_name())}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| service.dismiss(&id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
