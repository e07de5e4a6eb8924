pub mod common;
pub mod u501_sync;
pub mod u502_bulk_update;
pub mod u503_product_mutation;
