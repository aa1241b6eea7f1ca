//! Product edit dialog
//!
//! - view_model.rs: form state and save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub(crate) use view::optional_input;
pub use view::ProductEditDialog;
pub use view_model::{parse_price, ProductEditViewModel};
