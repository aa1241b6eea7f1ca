//! PageFrame: standard root wrapper for every screen
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                 `"{entity}--{category}"`, e.g. `"a002_product--list"`
//!   - `data-page-category` one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Table with filters/pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Form for creating or editing a record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// KPI tiles and charts
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page driving an external service (scanner, price model)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Administration page
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper that sets standard metadata on every page.
///
/// The BEM modifier class follows the category:
/// - `list`      → `page`
/// - `detail`    → `page page--detail`
/// - `dashboard` → `page page--dashboard`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
