mod view;
mod view_model;

pub use view::UserForm;
pub use view_model::UserFormViewModel;
