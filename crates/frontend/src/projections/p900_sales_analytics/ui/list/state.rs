use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::date_utils::{format_date, last_days};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, page_slice, sort_list, Sortable};
use crate::shared::list_view::{
    create_url_state, FilterKind, FilterSpec, ListSpec, QueryParams, ViewState,
};
use chrono::NaiveDate;
use contracts::projections::p900_sales_analytics::{Granularity, SalesPoint, SalesSummary, TopProduct};
use contracts::shared::SortOrder;
use leptos::prelude::*;
use std::cmp::Ordering;

pub const FILTER_STORES: &str = "store_ids";
pub const FILTER_START: &str = "start_date";
pub const FILTER_END: &str = "end_date";
pub const FILTER_GRANULARITY: &str = "granularity";

/// Окно отчёта, если даты не заданы в URL
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

const FILTERS: &[FilterSpec] = &[
    FilterSpec::new(FILTER_STORES, FilterKind::Multi),
    FilterSpec::new(FILTER_START, FilterKind::Date),
    FilterSpec::new(FILTER_END, FilterKind::Date),
    FilterSpec::new(FILTER_GRANULARITY, FilterKind::Select),
];

/// Sort and paging here apply to the top-products table, which is
/// ordered locally; only the filters go to the backend.
pub static SALES_ANALYTICS: ListSpec = ListSpec {
    default_page_size: 10,
    page_size_options: &[10, 25, 50],
    sort_fields: &["net_sales", "units_sold", "title", "store_name"],
    default_sort_field: "net_sales",
    default_sort_order: SortOrder::Desc,
    filters: FILTERS,
};

pub fn create_state() -> RwSignal<ViewState> {
    create_url_state(&SALES_ANALYTICS)
}

/// Effective `(start, end)`: URL dates, or the default window ending `today`.
pub fn date_range(state: &ViewState, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = state.date(FILTER_END).unwrap_or(today);
    let start = state
        .date(FILTER_START)
        .unwrap_or_else(|| last_days(end, DEFAULT_WINDOW_DAYS).0);
    (start, end)
}

pub fn granularity(state: &ViewState) -> Granularity {
    Granularity::parse(&state.text(FILTER_GRANULARITY)).unwrap_or(Granularity::Day)
}

/// Backend query: filters only, with the date range and granularity always present.
pub fn analytics_query(state: &ViewState, today: NaiveDate) -> String {
    let (start, end) = date_range(state, today);
    let mut params = QueryParams::new();
    for id in state.list(FILTER_STORES) {
        params.push(FILTER_STORES, id);
    }
    params.push(FILTER_START, start.format("%Y-%m-%d").to_string());
    params.push(FILTER_END, end.format("%Y-%m-%d").to_string());
    params.push(FILTER_GRANULARITY, granularity(state).as_str());
    params.to_query_string()
}

pub fn summary_cards(summary: &SalesSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Net sales", format_money(summary.net_sales, "")),
        ("Gross sales", format_money(summary.gross_sales, "")),
        ("Orders", format_number_int(summary.order_count as f64)),
        ("Units sold", format_number_int(summary.units_sold as f64)),
        ("Average order", format_money(summary.average_order_value, "")),
        ("Refunds", format_money(summary.refunds, "")),
    ]
}

/// Столбцы диаграммы: чистые продажи по периодам
pub fn chart_points(series: &[SalesPoint]) -> Vec<(String, f64)> {
    series
        .iter()
        .map(|p| (format_date(&p.period), p.net_sales))
        .collect()
}

impl Sortable for TopProduct {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "store_name" => cmp_opt_text(self.store_name.as_deref(), other.store_name.as_deref()),
            "units_sold" => self.units_sold.cmp(&other.units_sold),
            "net_sales" => self
                .net_sales
                .partial_cmp(&other.net_sales)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

/// Current page of the top-products table in the state's sort order.
pub fn visible_products(products: &[TopProduct], state: &ViewState) -> Vec<TopProduct> {
    let mut sorted = products.to_vec();
    sort_list(&mut sorted, &state.sort_field, state.sort_order);
    page_slice(&sorted, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn product(title: &str, units: i64, net: f64) -> TopProduct {
        TopProduct {
            product_id: units,
            title: title.into(),
            store_name: None,
            units_sold: units,
            net_sales: net,
        }
    }

    #[test]
    fn test_default_query() {
        let state = ViewState::defaults(&SALES_ANALYTICS);
        assert_eq!(
            analytics_query(&state, day("2024-03-30")),
            "start_date=2024-03-01&end_date=2024-03-30&granularity=day"
        );
    }

    #[test]
    fn test_query_from_url() {
        let state = ViewState::from_query(
            &SALES_ANALYTICS,
            "?store_ids=2&store_ids=5&start_date=2024-01-01&end_date=2024-01-31&granularity=week&sort_by=title",
        );
        assert_eq!(
            analytics_query(&state, day("2024-03-30")),
            "store_ids=2&store_ids=5&start_date=2024-01-01&end_date=2024-01-31&granularity=week"
        );
    }

    #[test]
    fn test_start_defaults_relative_to_end() {
        let state = ViewState::from_query(&SALES_ANALYTICS, "end_date=2024-02-29&granularity=hourly");
        let (start, end) = date_range(&state, day("2024-03-30"));
        assert_eq!(start, day("2024-01-31"));
        assert_eq!(end, day("2024-02-29"));
        assert_eq!(granularity(&state), Granularity::Day);
    }

    #[test]
    fn test_absurd_end_date_uses_default_window() {
        let state = ViewState::from_query(&SALES_ANALYTICS, "end_date=-262143-01-01");
        assert_eq!(state.date(FILTER_END), None);
        let (start, end) = date_range(&state, day("2024-03-30"));
        assert_eq!(start, day("2024-03-01"));
        assert_eq!(end, day("2024-03-30"));
    }

    #[test]
    fn test_local_sort_and_page() {
        let products = vec![product("b", 3, 30.0), product("a", 9, 10.0), product("c", 1, 50.0)];
        let mut state = ViewState::defaults(&SALES_ANALYTICS);
        let top: Vec<String> = visible_products(&products, &state).into_iter().map(|p| p.title).collect();
        assert_eq!(top, vec!["c", "b", "a"]);

        state.sort_by_header(&SALES_ANALYTICS, "units_sold");
        let top: Vec<i64> = visible_products(&products, &state).into_iter().map(|p| p.units_sold).collect();
        assert_eq!(top, vec![9, 3, 1]);

        state.sort_by_header(&SALES_ANALYTICS, "units_sold");
        let top: Vec<i64> = visible_products(&products, &state).into_iter().map(|p| p.units_sold).collect();
        assert_eq!(top, vec![1, 3, 9]);
    }

    #[test]
    fn test_chart_points() {
        let series = vec![SalesPoint {
            period: "2024-03-01".into(),
            gross_sales: 12.0,
            net_sales: 10.0,
            order_count: 2,
        }];
        assert_eq!(chart_points(&series), vec![("01.03.2024".to_string(), 10.0)]);
    }
}
