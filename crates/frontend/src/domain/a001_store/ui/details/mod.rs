//! Store form, used both inline (new store) and in the edit dialog
//!
//! - view_model.rs: form state and save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::StoreForm;
pub use view_model::StoreFormViewModel;
