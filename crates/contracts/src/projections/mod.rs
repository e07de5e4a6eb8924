pub mod p900_sales_analytics;
pub mod p901_forecast;
