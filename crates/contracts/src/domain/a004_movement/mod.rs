pub mod aggregate;
pub mod audit;

pub use aggregate::{CreateMovementRequest, MovementForm};
pub use audit::{latest, MovementRecord};
