use crate::shared::api_utils::{api_url, delete_json, get_json, post_json, ApiError};
use crate::shared::endpoints;
use contracts::domain::a002_webhook::{Webhook, WebhookInput};
use contracts::shared::ApiMessage;

pub async fn fetch_webhooks(store_id: i64) -> Result<Vec<Webhook>, ApiError> {
    get_json(&api_url(&endpoints::webhooks_for_store(store_id))).await
}

pub async fn register_webhook(input: &WebhookInput) -> Result<Webhook, ApiError> {
    post_json(&api_url(endpoints::WEBHOOKS), input).await
}

pub async fn delete_webhook(id: i64) -> Result<ApiMessage, ApiError> {
    delete_json(&api_url(&endpoints::webhook(id))).await
}
