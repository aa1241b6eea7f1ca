//! Tab management
//!
//! - `page` wraps a tab's content and toggles its visibility
//! - `registry` maps a tab key to its view
//! - `tab_labels` maps a tab key to its title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{tab_label_for_key, HOME_TAB};
