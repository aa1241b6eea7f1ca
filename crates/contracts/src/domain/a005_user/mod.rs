pub mod aggregate;
pub mod permissions;

pub use aggregate::{active_users, CreateUserDto, UpdateUserDto, User};
pub use permissions::Permissions;
