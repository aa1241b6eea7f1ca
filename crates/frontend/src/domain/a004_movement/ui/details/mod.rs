//! Movement registration form

mod view;
mod view_model;

pub use view::MovementFormView;
pub use view_model::MovementFormViewModel;
