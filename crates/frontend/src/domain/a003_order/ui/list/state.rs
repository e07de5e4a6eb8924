use crate::shared::components::table::format_money;
use crate::shared::export::CsvExportable;
use crate::shared::list_view::{create_url_state, FilterKind, FilterSpec, ListSpec, ViewState};
use contracts::domain::a003_order::{OrderMetrics, OrderRow};
use contracts::shared::SortOrder;
use leptos::prelude::*;

pub const FILTER_STORES: &str = "store_ids";
pub const FILTER_FINANCIAL: &str = "financial_status";
pub const FILTER_FULFILLMENT: &str = "fulfillment_status";
pub const FILTER_START: &str = "start_date";
pub const FILTER_END: &str = "end_date";
pub const FILTER_SEARCH: &str = "search";

const FILTERS: &[FilterSpec] = &[
    FilterSpec::new(FILTER_STORES, FilterKind::Multi),
    FilterSpec::new(FILTER_FINANCIAL, FilterKind::Select),
    FilterSpec::new(FILTER_FULFILLMENT, FilterKind::Select),
    FilterSpec::new(FILTER_START, FilterKind::Date),
    FilterSpec::new(FILTER_END, FilterKind::Date),
    FilterSpec::new(FILTER_SEARCH, FilterKind::Text),
];

pub static ORDER_LIST: ListSpec = ListSpec {
    default_page_size: 50,
    page_size_options: &[25, 50, 100, 200],
    sort_fields: &[
        "created_at",
        "order_number",
        "customer_name",
        "total_price",
        "financial_status",
        "fulfillment_status",
    ],
    default_sort_field: "created_at",
    default_sort_order: SortOrder::Desc,
    filters: FILTERS,
};

pub fn create_state() -> RwSignal<ViewState> {
    create_url_state(&ORDER_LIST)
}

/// Валюта для карточек: общая валюта страницы, если она одна
pub fn page_currency(orders: &[OrderRow]) -> String {
    let mut currencies = orders.iter().filter_map(|o| o.currency.as_deref());
    match currencies.next() {
        Some(first) if currencies.all(|c| c == first) => first.to_string(),
        _ => String::new(),
    }
}

/// `(label, value)` pairs for the metric cards.
pub fn metric_cards(metrics: &OrderMetrics, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Orders", metrics.total_orders.to_string()),
        ("Revenue", format_money(metrics.total_revenue, currency)),
        ("Average order", format_money(metrics.average_order_value, currency)),
        ("Unfulfilled", metrics.unfulfilled_count.to_string()),
    ]
}

/// CSS-класс бейджа статуса
pub fn status_badge_class(status: Option<&str>) -> &'static str {
    match status {
        Some("paid") | Some("fulfilled") => "badge badge--success",
        Some("pending") | Some("authorized") | Some("partial") | Some("partially_paid") => {
            "badge badge--warning"
        }
        Some("refunded") | Some("voided") | Some("partially_refunded") | Some("restocked") => {
            "badge badge--error"
        }
        _ => "badge",
    }
}

/// "partially_paid" -> "Partially paid"
pub fn status_label(status: &str) -> String {
    let text = status.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl CsvExportable for OrderRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order",
            "Date",
            "Store",
            "Customer",
            "Email",
            "Financial status",
            "Fulfillment status",
            "Items",
            "Total",
            "Currency",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.order_number.clone(),
            self.created_at.clone(),
            self.store_name.clone().unwrap_or_default(),
            self.customer_name.clone().unwrap_or_default(),
            self.customer_email.clone().unwrap_or_default(),
            self.financial_status.clone().unwrap_or_default(),
            self.fulfillment_status.clone().unwrap_or_default(),
            self.line_item_count.to_string(),
            format!("{:.2}", self.total_price),
            self.currency.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(currency: Option<&str>) -> OrderRow {
        OrderRow {
            id: 1,
            order_number: "#1001".into(),
            store_id: 1,
            store_name: Some("Main Store".into()),
            created_at: "2024-03-01T10:00:00Z".into(),
            customer_name: Some("Ann Lee".into()),
            customer_email: None,
            financial_status: Some("paid".into()),
            fulfillment_status: None,
            total_price: 1250.0,
            currency: currency.map(str::to_string),
            line_item_count: 3,
        }
    }

    #[test]
    fn test_url_defaults() {
        let state = ViewState::from_query(&ORDER_LIST, "?sort_order=sideways");
        assert_eq!(state.sort_field, "created_at");
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_backend_query_with_filters() {
        let mut state = ViewState::defaults(&ORDER_LIST);
        state.set_filter(&ORDER_LIST, FILTER_STORES, &["1", "2"]);
        state.set_filter(&ORDER_LIST, FILTER_FINANCIAL, &["paid"]);
        state.set_filter(&ORDER_LIST, FILTER_START, &["2024-03-01"]);
        assert_eq!(
            state.backend_query(&ORDER_LIST),
            "skip=0&limit=50&sort_by=created_at&sort_order=desc&store_ids=1&store_ids=2\
             &financial_status=paid&start_date=2024-03-01"
        );
    }

    #[test]
    fn test_page_currency() {
        assert_eq!(page_currency(&[order(Some("USD")), order(Some("USD"))]), "USD");
        assert_eq!(page_currency(&[order(Some("USD")), order(Some("EUR"))]), "");
        assert_eq!(page_currency(&[]), "");
    }

    #[test]
    fn test_metric_cards() {
        let metrics = OrderMetrics {
            total_orders: 12,
            total_revenue: 4800.0,
            average_order_value: 400.0,
            unfulfilled_count: 2,
        };
        let cards = metric_cards(&metrics, "USD");
        assert_eq!(cards[0], ("Orders", "12".to_string()));
        assert_eq!(cards[1], ("Revenue", "4,800.00 USD".to_string()));
        assert_eq!(cards[3].1, "2");
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(status_label("partially_paid"), "Partially paid");
        assert_eq!(status_badge_class(Some("paid")), "badge badge--success");
        assert_eq!(status_badge_class(None), "badge");
    }

    #[test]
    fn test_csv_row() {
        let row = order(Some("USD")).to_csv_row();
        assert_eq!(row.len(), OrderRow::headers().len());
        assert_eq!(row[0], "#1001");
        assert_eq!(row[8], "1250.00");
    }
}
