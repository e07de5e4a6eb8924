use crate::shared::components::table::{format_days, format_number_with_decimals};
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{
    any_contains, cmp_opt_f64, cmp_opt_text, cmp_text, filter_list, page_slice, sort_list, Searchable,
    Sortable,
};
use crate::shared::list_view::{
    create_url_state, FilterKind, FilterSpec, ListSpec, QueryParams, ViewState,
};
use contracts::projections::p901_forecast::{ForecastItem, ForecastStatus};
use contracts::shared::SortOrder;
use leptos::prelude::*;
use std::cmp::Ordering;

pub const FILTER_STORES: &str = "store_ids";
pub const FILTER_LOOKBACK: &str = "lookback_days";
pub const FILTER_STATUS: &str = "status";
pub const FILTER_SEARCH: &str = "search";

pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
pub const LOOKBACK_OPTIONS: &[u32] = &[7, 14, 30, 60, 90];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::new(FILTER_STORES, FilterKind::Multi),
    FilterSpec::new(FILTER_LOOKBACK, FilterKind::Number),
    FilterSpec::new(FILTER_STATUS, FilterKind::Select),
    FilterSpec::new(FILTER_SEARCH, FilterKind::Text),
];

pub static FORECAST_LIST: ListSpec = ListSpec {
    default_page_size: 50,
    page_size_options: &[25, 50, 100, 200],
    sort_fields: &[
        "days_of_stock",
        "product_title",
        "sku",
        "store_name",
        "current_stock",
        "avg_daily_sales",
        "reorder_quantity",
        "status",
    ],
    default_sort_field: "days_of_stock",
    default_sort_order: SortOrder::Asc,
    filters: FILTERS,
};

pub fn create_state() -> RwSignal<ViewState> {
    create_url_state(&FORECAST_LIST)
}

pub fn lookback_days(state: &ViewState) -> u32 {
    state
        .number(FILTER_LOOKBACK)
        .filter(|d| *d >= 1.0)
        .map(|d| d.round() as u32)
        .unwrap_or(DEFAULT_LOOKBACK_DAYS)
}

/// Backend query: only the keys that change the dataset itself. Status,
/// search, sort and page are applied to the cached forecast.
pub fn forecast_query(state: &ViewState) -> String {
    let mut params = QueryParams::new();
    for id in state.list(FILTER_STORES) {
        params.push(FILTER_STORES, id);
    }
    params.push(FILTER_LOOKBACK, lookback_days(state).to_string());
    params.to_query_string()
}

impl Searchable for ForecastItem {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        any_contains(
            filter_lower,
            &[
                Some(self.product_title.as_str()),
                self.variant_title.as_deref(),
                self.sku.as_deref(),
                self.store_name.as_deref(),
            ],
        )
    }
}

impl Sortable for ForecastItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "days_of_stock" => cmp_opt_f64(self.days_of_stock, other.days_of_stock),
            "product_title" => cmp_text(&self.product_title, &other.product_title),
            "sku" => cmp_opt_text(self.sku.as_deref(), other.sku.as_deref()),
            "store_name" => cmp_opt_text(self.store_name.as_deref(), other.store_name.as_deref()),
            "current_stock" => self.current_stock.cmp(&other.current_stock),
            "avg_daily_sales" => self
                .avg_daily_sales
                .partial_cmp(&other.avg_daily_sales)
                .unwrap_or(Ordering::Equal),
            "reorder_quantity" => self.reorder_quantity.cmp(&other.reorder_quantity),
            "status" => self.status.urgency().cmp(&other.status.urgency()),
            _ => Ordering::Equal,
        }
    }
}

/// Status and search filters plus sort, over the whole forecast.
pub fn filtered_sorted(items: &[ForecastItem], state: &ViewState) -> Vec<ForecastItem> {
    let status = ForecastStatus::parse(&state.text(FILTER_STATUS));
    let mut result = filter_list(items, &state.text(FILTER_SEARCH));
    result.retain(|item| status.map_or(true, |s| item.status == s));
    sort_list(&mut result, &state.sort_field, state.sort_order);
    result
}

pub fn current_page(filtered: &[ForecastItem], state: &ViewState) -> Vec<ForecastItem> {
    page_slice(filtered, state)
}

pub fn status_badge_class(status: ForecastStatus) -> &'static str {
    match status {
        ForecastStatus::Critical => "badge badge--error",
        ForecastStatus::Low => "badge badge--warning",
        ForecastStatus::Ok => "badge badge--success",
        ForecastStatus::Overstock => "badge badge--info",
        ForecastStatus::NoSales | ForecastStatus::Unknown => "badge",
    }
}

/// Количество позиций по статусам, в порядке срочности
pub fn status_counts(items: &[ForecastItem]) -> Vec<(ForecastStatus, usize)> {
    ForecastStatus::FILTERABLE
        .into_iter()
        .map(|s| (s, items.iter().filter(|i| i.status == s).count()))
        .collect()
}

pub fn display_title(item: &ForecastItem) -> String {
    match item.variant_title.as_deref() {
        Some(v) if !v.is_empty() && v != "Default Title" => format!("{} / {}", item.product_title, v),
        _ => item.product_title.clone(),
    }
}

/// Столбцы диаграммы запаса в днях; позиции без продаж не рисуем
pub fn days_chart_points(page: &[ForecastItem]) -> Vec<(String, f64)> {
    page.iter()
        .filter_map(|item| {
            let label = item.sku.clone().unwrap_or_else(|| display_title(item));
            item.days_of_stock.map(|d| (label, d))
        })
        .collect()
}

impl CsvExportable for ForecastItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "Product",
            "SKU",
            "Store",
            "Current stock",
            "Avg daily sales",
            "Days of stock",
            "Reorder qty",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            display_title(self),
            self.sku.clone().unwrap_or_default(),
            self.store_name.clone().unwrap_or_default(),
            self.current_stock.to_string(),
            format_number_with_decimals(self.avg_daily_sales, 2),
            format_days(self.days_of_stock),
            self.reorder_quantity.to_string(),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, days: Option<f64>, status: ForecastStatus) -> ForecastItem {
        ForecastItem {
            variant_id: id,
            sku: Some(format!("SKU-{}", id)),
            product_title: title.into(),
            variant_title: None,
            store_name: Some("Main Store".into()),
            current_stock: 10,
            avg_daily_sales: 1.5,
            days_of_stock: days,
            reorder_quantity: 0,
            status,
        }
    }

    fn sample() -> Vec<ForecastItem> {
        vec![
            item(1, "Mug", Some(12.0), ForecastStatus::Ok),
            item(2, "Cap", None, ForecastStatus::NoSales),
            item(3, "Shirt", Some(2.5), ForecastStatus::Critical),
            item(4, "Socks", Some(6.0), ForecastStatus::Low),
        ]
    }

    fn ids(items: &[ForecastItem]) -> Vec<i64> {
        items.iter().map(|i| i.variant_id).collect()
    }

    #[test]
    fn test_forecast_query_ignores_local_filters() {
        let state = ViewState::from_query(
            &FORECAST_LIST,
            "store_ids=3&status=low&search=mug&page=2&sort_by=sku",
        );
        assert_eq!(forecast_query(&state), "store_ids=3&lookback_days=30");

        let state = ViewState::from_query(&FORECAST_LIST, "lookback_days=60");
        assert_eq!(forecast_query(&state), "lookback_days=60");
        let state = ViewState::from_query(&FORECAST_LIST, "lookback_days=0");
        assert_eq!(lookback_days(&state), DEFAULT_LOOKBACK_DAYS);
    }

    #[test]
    fn test_default_sort_puts_no_sales_last() {
        let state = ViewState::defaults(&FORECAST_LIST);
        assert_eq!(ids(&filtered_sorted(&sample(), &state)), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_status_and_search_filters() {
        let state = ViewState::from_query(&FORECAST_LIST, "status=critical");
        assert_eq!(ids(&filtered_sorted(&sample(), &state)), vec![3]);

        let state = ViewState::from_query(&FORECAST_LIST, "search=sku-4");
        assert_eq!(ids(&filtered_sorted(&sample(), &state)), vec![4]);
    }

    #[test]
    fn test_sort_by_status_urgency() {
        let state = ViewState::from_query(&FORECAST_LIST, "sort_by=status&sort_order=desc");
        assert_eq!(ids(&filtered_sorted(&sample(), &state)), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_local_paging() {
        let items: Vec<ForecastItem> = (1..=30)
            .map(|i| item(i, "Mug", Some(i as f64), ForecastStatus::Ok))
            .collect();
        let state = ViewState::from_query(&FORECAST_LIST, "page=2&page_size=25");
        let page = current_page(&filtered_sorted(&items, &state), &state);
        assert_eq!(ids(&page), vec![26, 27, 28, 29, 30]);
    }

    #[test]
    fn test_chart_and_counts() {
        let items = sample();
        let points = days_chart_points(&items);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], ("SKU-1".to_string(), 12.0));
        let counts = status_counts(&items);
        assert_eq!(counts[0], (ForecastStatus::Critical, 1));
        assert_eq!(counts[4], (ForecastStatus::NoSales, 1));
    }
}
