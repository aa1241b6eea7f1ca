use leptos::prelude::*;
use std::collections::HashSet;

/// Row checkbox cell
///
/// Clicking the checkbox does not trigger the row click (stop_propagation).
///
/// # BEM classes
/// - `.table__cell--checkbox` on the td
/// - `.table__checkbox` on the input
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header checkbox: checked when every visible id is selected
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] visible_ids: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<HashSet<String>>,
    /// true = select all visible, false = clear
    on_change: Callback<bool>,
) -> impl IntoView {
    let all_selected = move || {
        let ids = visible_ids.get();
        let sel = selected.get();
        !ids.is_empty() && ids.iter().all(|id| sel.contains(id))
    };

    view! {
        <th class="table__cell table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_selected
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
