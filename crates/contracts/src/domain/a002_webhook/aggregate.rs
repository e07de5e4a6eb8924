use serde::{Deserialize, Serialize};

/// Топики, которые backend умеет регистрировать
pub const WEBHOOK_TOPICS: &[&str] = &[
    "orders/create",
    "orders/updated",
    "orders/cancelled",
    "orders/paid",
    "products/create",
    "products/update",
    "products/delete",
    "inventory_levels/update",
    "app/uninstalled",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: i64,
    pub store_id: i64,
    pub topic: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInput {
    pub store_id: i64,
    pub topic: String,
}

/// Topics from [`WEBHOOK_TOPICS`] not yet registered for the store.
pub fn unregistered_topics(existing: &[Webhook]) -> Vec<&'static str> {
    WEBHOOK_TOPICS
        .iter()
        .copied()
        .filter(|topic| !existing.iter().any(|w| w.topic == *topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_topics() {
        let existing = vec![Webhook {
            id: 1,
            store_id: 1,
            topic: "orders/create".into(),
            address: "https://example.com/hooks".into(),
            created_at: None,
        }];
        let free = unregistered_topics(&existing);
        assert!(!free.contains(&"orders/create"));
        assert_eq!(free.len(), WEBHOOK_TOPICS.len() - 1);
    }
}
