pub mod charting;
pub mod config;
pub mod pagination;
pub mod serde_utils;
