use serde::{Deserialize, Serialize};

/// Заготовка мутации, которую backend отдаёт для выбора в UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub query: String,
    #[serde(default)]
    pub variables: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub store_id: i64,
    pub query: String,
    pub variables: serde_json::Value,
}
