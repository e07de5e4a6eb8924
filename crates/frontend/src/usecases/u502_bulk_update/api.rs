use crate::shared::api_utils::{api_url, get_json, put_json, ApiError};
use crate::shared::endpoints;
use contracts::usecases::u502_bulk_update::{BulkUpdateRequest, BulkUpdateResponse, VariantRow};

/// Все варианты магазина; поиск и отбор строк на клиенте
pub async fn fetch_variants(store_id: i64) -> Result<Vec<VariantRow>, ApiError> {
    get_json(&api_url(&endpoints::bulk_variants_for_store(store_id))).await
}

pub async fn save_variants(request: &BulkUpdateRequest) -> Result<BulkUpdateResponse, ApiError> {
    put_json(&api_url(endpoints::BULK_VARIANTS), request).await
}
