pub mod a001_store;
pub mod a002_webhook;
pub mod a003_order;
pub mod a004_inventory;
