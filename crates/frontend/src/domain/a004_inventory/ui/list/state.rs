use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::components::CardTone;
use crate::shared::export::CsvExportable;
use crate::shared::list_view::{create_url_state, FilterKind, FilterSpec, ListSpec, ViewState};
use contracts::domain::a004_inventory::{InventoryMetrics, InventoryRow, StockLevel};
use contracts::shared::SortOrder;
use leptos::prelude::*;

pub const FILTER_STORES: &str = "store_ids";
pub const FILTER_TYPES: &str = "product_types";
pub const FILTER_MIN_QTY: &str = "min_quantity";
pub const FILTER_MAX_QTY: &str = "max_quantity";
pub const FILTER_SEARCH: &str = "search";

const FILTERS: &[FilterSpec] = &[
    FilterSpec::new(FILTER_STORES, FilterKind::Multi),
    FilterSpec::new(FILTER_TYPES, FilterKind::Multi),
    FilterSpec::new(FILTER_MIN_QTY, FilterKind::Number),
    FilterSpec::new(FILTER_MAX_QTY, FilterKind::Number),
    FilterSpec::new(FILTER_SEARCH, FilterKind::Text),
];

pub static INVENTORY_LIST: ListSpec = ListSpec {
    default_page_size: 50,
    page_size_options: &[25, 50, 100, 200],
    sort_fields: &["available", "product_title", "sku", "product_type", "store_name", "price"],
    default_sort_field: "available",
    default_sort_order: SortOrder::Asc,
    filters: FILTERS,
};

pub fn create_state() -> RwSignal<ViewState> {
    create_url_state(&INVENTORY_LIST)
}

pub fn stock_badge(level: StockLevel) -> (&'static str, &'static str) {
    match level {
        StockLevel::OutOfStock => ("badge badge--error", "Out of stock"),
        StockLevel::Low => ("badge badge--warning", "Low"),
        StockLevel::Healthy => ("badge badge--success", "In stock"),
    }
}

/// `(label, value, tone)` for the metric cards.
pub fn metric_cards(metrics: &InventoryMetrics) -> Vec<(&'static str, String, CardTone)> {
    let warn_if = |n: i64, tone: CardTone| if n > 0 { tone } else { CardTone::Neutral };
    vec![
        ("SKUs", format_number_int(metrics.sku_count as f64), CardTone::Neutral),
        ("Units on hand", format_number_int(metrics.total_units as f64), CardTone::Neutral),
        ("Stock value", format_money(metrics.total_value, ""), CardTone::Neutral),
        (
            "Low stock",
            metrics.low_stock_count.to_string(),
            warn_if(metrics.low_stock_count, CardTone::Warning),
        ),
        (
            "Out of stock",
            metrics.out_of_stock_count.to_string(),
            warn_if(metrics.out_of_stock_count, CardTone::Bad),
        ),
    ]
}

/// `(value, label)` options of the product type filter.
pub fn type_options(types: &[String]) -> Vec<(String, String)> {
    types.iter().map(|t| (t.clone(), t.clone())).collect()
}

impl CsvExportable for InventoryRow {
    fn headers() -> Vec<&'static str> {
        vec!["Product", "Variant", "SKU", "Type", "Store", "Location", "Available", "Price", "Cost"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let money = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_default();
        vec![
            self.product_title.clone(),
            self.variant_title.clone().unwrap_or_default(),
            self.sku.clone().unwrap_or_default(),
            self.product_type.clone().unwrap_or_default(),
            self.store_name.clone().unwrap_or_default(),
            self.location_name.clone().unwrap_or_default(),
            self.available.to_string(),
            money(self.price),
            money(self.cost),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_available_ascending() {
        let state = ViewState::from_query(&INVENTORY_LIST, "");
        assert_eq!(state.sort_field, "available");
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_quantity_range_in_backend_query() {
        let state = ViewState::from_query(
            &INVENTORY_LIST,
            "min_quantity=1&max_quantity=10&product_types=Shirts&product_types=Hats",
        );
        assert_eq!(
            state.backend_query(&INVENTORY_LIST),
            "skip=0&limit=50&sort_by=available&sort_order=asc&product_types=Shirts\
             &product_types=Hats&min_quantity=1&max_quantity=10"
        );
    }

    #[test]
    fn test_metric_cards_tone() {
        let metrics = InventoryMetrics {
            sku_count: 1200,
            total_units: 5400,
            total_value: 10250.5,
            low_stock_count: 3,
            out_of_stock_count: 0,
        };
        let cards = metric_cards(&metrics);
        assert_eq!(cards[0].1, "1,200");
        assert_eq!(cards[2].1, "10,250.50");
        assert_eq!(cards[3].2, CardTone::Warning);
        assert_eq!(cards[4].2, CardTone::Neutral);
    }

    #[test]
    fn test_stock_badge() {
        assert_eq!(stock_badge(StockLevel::OutOfStock).1, "Out of stock");
        assert_eq!(stock_badge(StockLevel::Healthy).0, "badge badge--success");
    }
}
