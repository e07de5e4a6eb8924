//! Таблица эндпоинтов backend: логическая операция → путь.
//!
//! Все страницы берут пути только отсюда; базовый адрес добавляет
//! [`crate::shared::api_utils::api_url`].

use contracts::usecases::u501_sync::SyncKind;

pub const STORES: &str = "/api/config/stores";
pub const WEBHOOKS: &str = "/api/webhooks";
pub const SYNC_STATUS: &str = "/api/sync/status";
pub const ORDERS_REPORT: &str = "/api/dashboard/orders";
pub const INVENTORY_REPORT: &str = "/api/dashboard/inventory";
pub const PRODUCT_TYPES: &str = "/api/dashboard/product-types";
pub const INVENTORY_FORECAST: &str = "/api/forecast/inventory";
pub const SALES_ANALYTICS: &str = "/api/analytics/sales";
pub const BULK_VARIANTS: &str = "/api/bulk/variants";
pub const MUTATION_TEMPLATES: &str = "/api/mutations/templates";
pub const MUTATION_EXECUTE: &str = "/api/mutations/execute";

pub fn store(id: i64) -> String {
    format!("{}/{}", STORES, id)
}

pub fn store_test(id: i64) -> String {
    format!("{}/{}/test", STORES, id)
}

pub fn webhooks_for_store(store_id: i64) -> String {
    format!("{}?store_id={}", WEBHOOKS, store_id)
}

pub fn webhook(id: i64) -> String {
    format!("{}/{}", WEBHOOKS, id)
}

pub fn sync_start(kind: SyncKind) -> String {
    format!("/api/sync/{}/start", kind.as_str())
}

pub fn bulk_variants_for_store(store_id: i64) -> String {
    format!("{}?store_id={}", BULK_VARIANTS, store_id)
}

/// Appends a prepared query string (without `?`), if any.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(store(4), "/api/config/stores/4");
        assert_eq!(store_test(4), "/api/config/stores/4/test");
        assert_eq!(webhooks_for_store(2), "/api/webhooks?store_id=2");
        assert_eq!(webhook(9), "/api/webhooks/9");
        assert_eq!(sync_start(SyncKind::Inventory), "/api/sync/inventory/start");
        assert_eq!(bulk_variants_for_store(1), "/api/bulk/variants?store_id=1");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query(ORDERS_REPORT, ""), "/api/dashboard/orders");
        assert_eq!(
            with_query(ORDERS_REPORT, "skip=0&limit=50"),
            "/api/dashboard/orders?skip=0&limit=50"
        );
    }
}
