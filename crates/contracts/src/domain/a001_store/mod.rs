pub mod aggregate;

pub use aggregate::{format_cep, sanitize_cep, Store, StoreDto};
