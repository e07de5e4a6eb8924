pub mod dto;

pub use dto::{InventoryListResponse, InventoryMetrics, InventoryRow, StockLevel};
