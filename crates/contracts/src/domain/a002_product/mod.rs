pub mod aggregate;
pub mod filter;

pub use aggregate::{
    Card, CardUpdate, CreateProductRequest, OtherProduct, OtherProductDto, Product, ProductUpdate,
};
pub use filter::{apply_filters, store_names, PriceBand, ProductFilter};
