pub mod dto;

pub use dto::{ForecastItem, ForecastStatus};
