use crate::shared::api_utils::{api_url, delete_json, get_json, post_empty, post_json, put_json, ApiError};
use crate::shared::endpoints;
use contracts::domain::a001_store::{Store, StoreInput};
use contracts::shared::ApiMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub async fn fetch_stores() -> Result<Vec<Store>, ApiError> {
    get_json(&api_url(endpoints::STORES)).await
}

pub async fn create_store(input: &StoreInput) -> Result<Store, ApiError> {
    post_json(&api_url(endpoints::STORES), input).await
}

pub async fn update_store(id: i64, input: &StoreInput) -> Result<Store, ApiError> {
    put_json(&api_url(&endpoints::store(id)), input).await
}

pub async fn delete_store(id: i64) -> Result<ApiMessage, ApiError> {
    delete_json(&api_url(&endpoints::store(id))).await
}

pub async fn test_store_connection(id: i64) -> Result<ApiMessage, ApiError> {
    post_empty(&api_url(&endpoints::store_test(id))).await
}

/// Loads the store list into `stores` in the background (store dropdowns
/// on other pages). A failure is written to `error`.
pub fn spawn_load_stores(stores: RwSignal<Vec<Store>>, error: RwSignal<Option<String>>) {
    spawn_local(async move {
        match fetch_stores().await {
            Ok(list) => {
                log::debug!("loaded {} stores", list.len());
                stores.set(list);
            }
            Err(e) => error.set(Some(format!("Could not load stores: {}", e))),
        }
    });
}
