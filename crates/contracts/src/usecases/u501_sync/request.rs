use serde::{Deserialize, Serialize};

/// Что синхронизируем; соответствует сегменту пути `/api/sync/{kind}/start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncKind {
    Orders,
    Products,
    Inventory,
}

impl SyncKind {
    pub const ALL: [SyncKind; 3] = [SyncKind::Orders, SyncKind::Products, SyncKind::Inventory];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncKind::Orders => "orders",
            SyncKind::Products => "products",
            SyncKind::Inventory => "inventory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncKind::Orders => "Orders",
            SyncKind::Products => "Products",
            SyncKind::Inventory => "Inventory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStartRequest {
    /// Пустой список - все активные магазины
    pub store_ids: Vec<i64>,
    #[serde(default)]
    pub full_resync: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncStartResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub task_ids: Vec<String>,
}
