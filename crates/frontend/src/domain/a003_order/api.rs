use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::endpoints;
use contracts::domain::a003_order::{OrderListResponse, OrderRow};
use serde::Deserialize;

/// Старые версии backend отдают голый массив без `total_count`
#[derive(Deserialize)]
#[serde(untagged)]
enum OrdersPayload {
    Rows(Vec<OrderRow>),
    Report(OrderListResponse),
}

impl From<OrdersPayload> for OrderListResponse {
    fn from(payload: OrdersPayload) -> Self {
        match payload {
            OrdersPayload::Report(report) => report,
            OrdersPayload::Rows(orders) => OrderListResponse {
                total_count: orders.len(),
                orders,
                ..Default::default()
            },
        }
    }
}

/// `query` is the list state's backend query (`skip`, `limit`, sort, filters).
pub async fn fetch_orders(query: &str) -> Result<OrderListResponse, ApiError> {
    let payload: OrdersPayload =
        get_json(&api_url(&endpoints::with_query(endpoints::ORDERS_REPORT, query))).await?;
    Ok(payload.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_payload() {
        let json = r##"{"orders":[{"id":1,"order_number":"#1001","store_id":1,"created_at":"2024-03-01T10:00:00Z","total_price":20.5}],"total_count":31}"##;
        let payload: OrdersPayload = serde_json::from_str(json).unwrap();
        let report = OrderListResponse::from(payload);
        assert_eq!(report.total_count, 31);
        assert_eq!(report.orders.len(), 1);
    }

    #[test]
    fn test_bare_array_payload() {
        let json = r##"[{"id":1,"order_number":"#1001","store_id":1,"created_at":"2024-03-01"}]"##;
        let payload: OrdersPayload = serde_json::from_str(json).unwrap();
        let report = OrderListResponse::from(payload);
        assert_eq!(report.total_count, 1);
        assert_eq!(report.metrics.total_orders, 0);
    }
}
