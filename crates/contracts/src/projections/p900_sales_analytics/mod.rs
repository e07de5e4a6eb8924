pub mod dto;

pub use dto::{Granularity, SalesAnalyticsResponse, SalesPoint, SalesSummary, TopProduct};
