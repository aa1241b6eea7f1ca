pub mod a001_store;
pub mod a002_product;
pub mod a003_inventory;
pub mod a004_movement;
pub mod a005_user;
