//! Periodic refresh that pauses while the user is typing in a form field

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use web_sys::window;

/// Tags that count as "typing"
const FORM_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

pub fn is_form_tag(tag: &str) -> bool {
    FORM_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// True when a form control currently has focus
pub fn user_is_typing() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|el| is_form_tag(&el.tag_name()))
        .unwrap_or(false)
}

/// Runs `tick` every `interval_ms` for the lifetime of the calling component.
/// Ticks are skipped while a form field has focus.
pub fn use_polling(interval_ms: u32, tick: impl Fn() + 'static) {
    let interval = Interval::new(interval_ms, move || {
        if user_is_typing() {
            log::debug!("Refresh skipped: form field focused");
            return;
        }
        tick();
    });
    // Dropped together with the owner, which cancels the timer
    let _ = StoredValue::new_local(interval);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_tags() {
        assert!(is_form_tag("INPUT"));
        assert!(is_form_tag("textarea"));
        assert!(is_form_tag("SELECT"));
        assert!(!is_form_tag("BUTTON"));
        assert!(!is_form_tag("BODY"));
    }
}
