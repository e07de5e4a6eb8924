use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::endpoints;
use contracts::projections::p900_sales_analytics::SalesAnalyticsResponse;

/// `query`: `store_ids`, `start_date`, `end_date`, `granularity`.
pub async fn fetch_sales_analytics(query: &str) -> Result<SalesAnalyticsResponse, ApiError> {
    get_json(&api_url(&endpoints::with_query(endpoints::SALES_ANALYTICS, query))).await
}
