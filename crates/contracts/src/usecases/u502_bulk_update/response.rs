use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateFailure {
    pub variant_id: i64,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub updated: usize,
    #[serde(default)]
    pub failed: Vec<BulkUpdateFailure>,
}
