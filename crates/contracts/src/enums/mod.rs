pub mod card_condition;
pub mod movement_type;
pub mod product_type;
pub mod user_role;

pub use card_condition::CardCondition;
pub use movement_type::{MovementStatus, MovementType};
pub use product_type::ProductType;
pub use user_role::UserRole;
