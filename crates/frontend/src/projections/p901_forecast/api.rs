use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::endpoints;
use contracts::projections::p901_forecast::ForecastItem;

/// Полный прогноз по выбранным магазинам; фильтрация и сортировка на клиенте.
pub async fn fetch_forecast(query: &str) -> Result<Vec<ForecastItem>, ApiError> {
    get_json(&api_url(&endpoints::with_query(endpoints::INVENTORY_FORECAST, query))).await
}
