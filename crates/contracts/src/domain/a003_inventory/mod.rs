pub mod aggregate;
pub mod stock_level;

pub use aggregate::{InventoryItem, InventorySummary};
pub use stock_level::{StockFilter, StockLevel, StockThresholds};
