use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::endpoints;
use contracts::usecases::u501_sync::{SyncKind, SyncStartRequest, SyncStartResponse, SyncStatusResponse};

/// Запуск синхронизации одного вида данных для выбранных магазинов
pub async fn start_sync(kind: SyncKind, request: &SyncStartRequest) -> Result<SyncStartResponse, ApiError> {
    post_json(&api_url(&endpoints::sync_start(kind)), request).await
}

/// Состояние всех задач синхронизации
pub async fn fetch_sync_status() -> Result<SyncStatusResponse, ApiError> {
    get_json(&api_url(endpoints::SYNC_STATUS)).await
}
