//! List helpers: debounced search input and match highlighting
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::icons::icon;

/// Highlights every case-insensitive occurrence of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of the matches; empty when the lowercase form changes byte
/// lengths, so slicing stays on char boundaries
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar produtos...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);
    let delay = config().ui.search_debounce_ms;

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the stored timeout drops, and so cancels, the previous one
        let timeout = Timeout::new(delay, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Pikachu pika", "PIKA"), vec![(0, 4), (8, 12)]);
        assert!(match_ranges("Pikachu", "  ").is_empty());
        assert!(match_ranges("Pikachu", "mew").is_empty());
    }

    #[test]
    fn test_match_ranges_multibyte() {
        assert_eq!(match_ranges("Coleção São", "são"), vec![(10, 14)]);
    }
}
