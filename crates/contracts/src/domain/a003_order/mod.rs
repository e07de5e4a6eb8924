pub mod dto;

pub use dto::{OrderListResponse, OrderMetrics, OrderRow, FINANCIAL_STATUSES, FULFILLMENT_STATUSES};
