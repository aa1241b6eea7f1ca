//! Product registration
//!
//! - view_model.rs: form state, scan prefill and submit command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ProductRegistration;
pub use view_model::ProductRegistrationViewModel;
