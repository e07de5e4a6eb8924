use contracts::domain::a001_store::Store;
use contracts::domain::a002_webhook::aggregate::unregistered_topics;
use contracts::domain::a002_webhook::Webhook;

/// Магазин, выбранный при открытии страницы: первый активный, иначе первый
pub fn default_store_id(stores: &[Store]) -> Option<i64> {
    stores
        .iter()
        .find(|s| s.is_active)
        .or_else(|| stores.first())
        .map(|s| s.id)
}

/// Parses the value of the store dropdown.
pub fn parse_store_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Topic to preselect in the register form after the list changes.
pub fn next_topic(existing: &[Webhook], current: &str) -> String {
    let free = unregistered_topics(existing);
    if free.contains(&current) {
        current.to_string()
    } else {
        free.first().map(|t| t.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> Vec<Store> {
        serde_json::from_str(
            r#"[{"id":1,"name":"Old","is_active":false},{"id":2,"name":"Main"},{"id":3,"name":"EU"}]"#,
        )
        .unwrap()
    }

    fn hook(topic: &str) -> Webhook {
        Webhook {
            id: 1,
            store_id: 2,
            topic: topic.into(),
            address: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_default_store() {
        assert_eq!(default_store_id(&stores()), Some(2));
        assert_eq!(default_store_id(&stores()[..1]), Some(1));
        assert_eq!(default_store_id(&[]), None);
    }

    #[test]
    fn test_parse_store_id() {
        assert_eq!(parse_store_id("2"), Some(2));
        assert_eq!(parse_store_id(""), None);
    }

    #[test]
    fn test_next_topic() {
        assert_eq!(next_topic(&[], ""), "orders/create");
        assert_eq!(next_topic(&[hook("orders/create")], "orders/create"), "orders/updated");
        assert_eq!(next_topic(&[], "products/update"), "products/update");
    }
}
