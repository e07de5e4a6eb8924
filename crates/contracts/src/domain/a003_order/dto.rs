use serde::{Deserialize, Serialize};

pub const FINANCIAL_STATUSES: &[&str] = &[
    "pending",
    "authorized",
    "paid",
    "partially_paid",
    "partially_refunded",
    "refunded",
    "voided",
];

pub const FULFILLMENT_STATUSES: &[&str] = &["unfulfilled", "partial", "fulfilled", "restocked"];

/// Строка отчёта по заказам (`GET /api/dashboard/orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub store_id: i64,
    #[serde(default)]
    pub store_name: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub financial_status: Option<String>,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub line_item_count: i64,
}

/// Агрегаты по всему отфильтрованному набору, а не только по странице
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub unfulfilled_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub orders: Vec<OrderRow>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub metrics: OrderMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_response() {
        let json = r##"{
            "orders": [{
                "id": 10, "order_number": "#1001", "store_id": 1,
                "created_at": "2024-03-15T14:02:26Z", "total_price": 120.5,
                "financial_status": "paid"
            }],
            "total_count": 41,
            "metrics": {"total_orders": 41, "total_revenue": 5230.0, "average_order_value": 127.56}
        }"##;
        let resp: OrderListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_count, 41);
        assert_eq!(resp.orders[0].financial_status.as_deref(), Some("paid"));
        assert_eq!(resp.orders[0].line_item_count, 0);
        assert_eq!(resp.metrics.unfulfilled_count, 0);
    }

    #[test]
    fn test_decode_empty_body() {
        let resp: OrderListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.orders.is_empty());
        assert_eq!(resp.total_count, 0);
    }
}
