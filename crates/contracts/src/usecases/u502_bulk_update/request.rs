use serde::{Deserialize, Serialize};

/// Изменения одного варианта; отсутствующие поля не трогаются
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantUpdate {
    pub variant_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl VariantUpdate {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.compare_at_price.is_none() && self.sku.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    pub store_id: i64,
    pub updates: Vec<VariantUpdate>,
}
