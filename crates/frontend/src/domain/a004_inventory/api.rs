use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::endpoints;
use contracts::domain::a004_inventory::{InventoryListResponse, InventoryRow};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum InventoryPayload {
    Rows(Vec<InventoryRow>),
    Report(InventoryListResponse),
}

impl From<InventoryPayload> for InventoryListResponse {
    fn from(payload: InventoryPayload) -> Self {
        match payload {
            InventoryPayload::Report(report) => report,
            InventoryPayload::Rows(items) => InventoryListResponse {
                total_count: items.len(),
                items,
                ..Default::default()
            },
        }
    }
}

pub async fn fetch_inventory(query: &str) -> Result<InventoryListResponse, ApiError> {
    let payload: InventoryPayload =
        get_json(&api_url(&endpoints::with_query(endpoints::INVENTORY_REPORT, query))).await?;
    Ok(payload.into())
}

/// Distinct product types for the type filter.
pub async fn fetch_product_types() -> Result<Vec<String>, ApiError> {
    let mut types: Vec<String> = get_json(&api_url(endpoints::PRODUCT_TYPES)).await?;
    types.retain(|t| !t.trim().is_empty());
    types.sort();
    types.dedup();
    Ok(types)
}
