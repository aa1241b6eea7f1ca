use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Page buttons: previous, a window of page numbers, next, and the
/// "Mostrando a-b de n" summary
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Receives the 1-based page to show
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || pagination.get().info_text()}</span>
            <Show when=move || { pagination.get().total_pages() > 1 }>
                <div class="pagination-buttons">
                    <button
                        class="pagination-btn"
                        disabled=move || !pagination.get().has_prev()
                        on:click=move |_| on_page_change.run(pagination.get_untracked().page - 1)
                        title="Página anterior"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        let p = pagination.get();
                        p.visible_pages()
                            .into_iter()
                            .map(|n| {
                                view! {
                                    <button
                                        class="pagination-btn"
                                        class:pagination-btn--active=n == p.page
                                        on:click=move |_| on_page_change.run(n)
                                    >
                                        {n}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        disabled=move || !pagination.get().has_next()
                        on:click=move |_| on_page_change.run(pagination.get_untracked().page + 1)
                        title="Próxima página"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </Show>
        </div>
    }
}
