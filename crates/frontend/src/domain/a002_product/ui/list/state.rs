use contracts::domain::a002_product::ProductFilter;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::config;
use crate::shared::storage::{get_pref, set_pref};

const FILTERS_OPEN_KEY: &str = "filters_open";

#[derive(Clone, Copy)]
pub struct ProductListState {
    pub filter: RwSignal<ProductFilter>,
    /// 1-based
    pub page: RwSignal<usize>,
    pub selected: RwSignal<HashSet<String>>,
    pub filters_open: RwSignal<bool>,
}

fn pref_key(name: &str) -> String {
    format!("{}{}", config().ui.storage_prefix, name)
}

pub fn create_state() -> ProductListState {
    let filters_open = get_pref(&pref_key(FILTERS_OPEN_KEY)).as_deref() == Some("true");
    ProductListState {
        filter: RwSignal::new(ProductFilter {
            thresholds: config().stock.product_list,
            ..Default::default()
        }),
        page: RwSignal::new(1),
        selected: RwSignal::new(HashSet::new()),
        filters_open: RwSignal::new(filters_open),
    }
}

impl ProductListState {
    /// Any filter change goes back to page one and drops the selection
    pub fn update_filter(&self, f: impl FnOnce(&mut ProductFilter)) {
        self.filter.update(f);
        self.page.set(1);
        self.selected.set(HashSet::new());
    }

    pub fn go_to_page(&self, page: usize) {
        self.page.set(page);
        self.selected.set(HashSet::new());
    }

    pub fn toggle_filters(&self) {
        self.filters_open.update(|open| *open = !*open);
        set_pref(
            &pref_key(FILTERS_OPEN_KEY),
            if self.filters_open.get_untracked() { "true" } else { "false" },
        );
    }
}
