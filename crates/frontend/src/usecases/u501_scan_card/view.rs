use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_scan_card::{CardMatch, ScanCard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::api;
use crate::shared::toast::use_toast;

/// Image picker that sends the photo to the scanner and hands the match over
#[component]
pub fn ScanCardInput(on_scanned: Callback<CardMatch>) -> impl IntoView {
    let toast = use_toast();
    let (scanning, set_scanning) = signal(false);

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_scanning.set(true);
        spawn_local(async move {
            match api::scan_card(&file).await {
                Ok(card) => {
                    log::info!("Carta lida com sucesso: {:?}", card);
                    on_scanned.run(card);
                }
                Err(e) => {
                    log::error!("Falha ao ler carta: {}", e);
                    toast.error(format!("Falha ao ler carta: {}", e));
                }
            }
            set_scanning.set(false);
        });
    };

    view! {
        <div class="form__group scan-card">
            <label class="form__label">{ScanCard::display_name()}</label>
            <input
                type="file"
                accept="image/*"
                class="form__input"
                prop:disabled=move || scanning.get()
                on:change=on_change
            />
            <Show when=move || scanning.get()>
                <span class="scan-card__status"><Spinner size=SpinnerSize::Small /> " Lendo carta..."</span>
            </Show>
        </div>
    }
}
