use super::page_info::{PageInfo, PageMove};
use super::query::QueryParams;
use super::spec::{FilterKind, ListSpec};
use chrono::{Datelike, NaiveDate};
use contracts::shared::SortOrder;
use std::collections::BTreeMap;

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Даты вне этих лет из URL не принимаются.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Нормализованное значение одного фильтра
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Multi(Vec<String>),
    Number(f64),
    Date(NaiveDate),
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl FilterValue {
    /// Builds a value of `kind` from raw strings (URL params or form input).
    /// Blank or unparsable input yields `None`, meaning "no filter".
    pub fn from_raw<S: AsRef<str>>(kind: FilterKind, values: &[S]) -> Option<Self> {
        let first = values
            .iter()
            .map(|v| v.as_ref().trim())
            .find(|v| !v.is_empty());
        match kind {
            FilterKind::Text | FilterKind::Select => first.map(|v| FilterValue::Text(v.to_string())),
            FilterKind::Multi => {
                let mut items: Vec<String> = Vec::new();
                for v in values.iter().map(|v| v.as_ref().trim()) {
                    if !v.is_empty() && !items.iter().any(|existing| existing == v) {
                        items.push(v.to_string());
                    }
                }
                if items.is_empty() {
                    None
                } else {
                    Some(FilterValue::Multi(items))
                }
            }
            FilterKind::Number => first
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .map(FilterValue::Number),
            FilterKind::Date => first
                .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
                .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
                .map(FilterValue::Date),
        }
    }

    /// Values as they appear in a query string, one entry per parameter.
    pub fn to_params(&self) -> Vec<String> {
        match self {
            FilterValue::Text(s) => vec![s.clone()],
            FilterValue::Multi(items) => items.clone(),
            FilterValue::Number(n) => vec![format_number(*n)],
            FilterValue::Date(d) => vec![d.format(DATE_FORMAT).to_string()],
        }
    }
}

/// Pagination, sort and filter state of one list view.
///
/// `page` is 1-based. `total_count` comes from the last response and is
/// never written to the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, FilterValue>,
}

impl ViewState {
    pub fn defaults(spec: &ListSpec) -> Self {
        Self {
            page: 1,
            page_size: spec.default_page_size,
            total_count: 0,
            sort_field: spec.default_sort_field.to_string(),
            sort_order: spec.default_sort_order,
            filters: BTreeMap::new(),
        }
    }

    /// Restores state from a query string. Anything missing, unknown or
    /// malformed silently falls back to the defaults of `spec`.
    pub fn from_query(spec: &ListSpec, raw: &str) -> Self {
        let params = QueryParams::parse(raw);
        let mut state = Self::defaults(spec);

        if let Some(size) = params
            .first("page_size")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|s| spec.accepts_page_size(*s))
        {
            state.page_size = size;
        }
        // Страница, чьё окно строк не помещается в usize, считается мусором.
        let page_size = state.page_size;
        if let Some(page) = params
            .first("page")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .filter(|p| {
                (p - 1)
                    .checked_mul(page_size)
                    .and_then(|offset| offset.checked_add(page_size))
                    .is_some()
            })
        {
            state.page = page;
        }
        if let Some(field) = params.first("sort_by").filter(|f| spec.is_sortable(f)) {
            state.sort_field = field.to_string();
        }
        if let Some(order) = params.first("sort_order").and_then(SortOrder::parse) {
            state.sort_order = order;
        }
        for filter in spec.filters {
            let values = params.all(filter.key);
            if let Some(value) = FilterValue::from_raw(filter.kind, &values) {
                state.filters.insert(filter.key.to_string(), value);
            }
        }
        state
    }

    /// Query string for the page URL; parameters equal to their default are omitted.
    pub fn to_query(&self, spec: &ListSpec) -> String {
        let mut params = QueryParams::new();
        if self.page != 1 {
            params.push("page", self.page.to_string());
        }
        if self.page_size != spec.default_page_size {
            params.push("page_size", self.page_size.to_string());
        }
        if self.sort_field != spec.default_sort_field {
            params.push("sort_by", self.sort_field.clone());
        }
        if self.sort_order != spec.default_sort_order {
            params.push("sort_order", self.sort_order.as_str());
        }
        for filter in spec.filters {
            if let Some(value) = self.filters.get(filter.key) {
                for v in value.to_params() {
                    params.push(filter.key, v);
                }
            }
        }
        params.to_query_string()
    }

    /// Query string for the backend: `skip`, `limit`, sort and every active filter.
    pub fn backend_query(&self, spec: &ListSpec) -> String {
        let mut params = QueryParams::new();
        params.push("skip", self.offset().to_string());
        params.push("limit", self.page_size.to_string());
        params.push("sort_by", self.sort_field.clone());
        params.push("sort_order", self.sort_order.as_str());
        for filter in spec.filters {
            if let Some(value) = self.filters.get(filter.key) {
                for v in value.to_params() {
                    params.push(filter.backend_key, v);
                }
            }
        }
        params.to_query_string()
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::of(self)
    }

    pub fn text(&self, key: &str) -> String {
        match self.filters.get(key) {
            Some(FilterValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        match self.filters.get(key) {
            Some(FilterValue::Multi(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.filters.get(key) {
            Some(FilterValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.filters.get(key) {
            Some(FilterValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    /// Raw form value of a filter (`""` when unset), for binding inputs.
    pub fn input_value(&self, key: &str) -> String {
        self.filters
            .get(key)
            .map(|v| v.to_params().join(","))
            .unwrap_or_default()
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.len()
    }

    // ---- reducers -------------------------------------------------------

    /// Clicking a column header: same column flips the order, another
    /// column becomes the sort key with the page's default order. Always
    /// returns to page 1.
    pub fn sort_by_header(&mut self, spec: &ListSpec, field: &str) -> bool {
        if !spec.is_sortable(field) {
            return false;
        }
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_order = spec.default_sort_order;
        }
        self.page = 1;
        true
    }

    /// Sets (or clears, for blank input) a filter declared in `spec`.
    /// Returns `true` when the filter value actually changed; the page is
    /// reset to 1 in that case.
    pub fn set_filter<S: AsRef<str>>(&mut self, spec: &ListSpec, key: &str, values: &[S]) -> bool {
        let Some(filter) = spec.filter(key) else {
            log::warn!("set_filter: '{}' is not a filter of this list", key);
            return false;
        };
        let new_value = FilterValue::from_raw(filter.kind, values);
        if self.filters.get(key) == new_value.as_ref() {
            return false;
        }
        match new_value {
            Some(value) => {
                self.filters.insert(key.to_string(), value);
            }
            None => {
                self.filters.remove(key);
            }
        }
        self.page = 1;
        true
    }

    pub fn clear_filter(&mut self, key: &str) -> bool {
        if self.filters.remove(key).is_some() {
            self.page = 1;
            true
        } else {
            false
        }
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        self.page = 1;
        true
    }

    /// Moves within `[1, total_pages]`; a move that would leave the range
    /// is a no-op and returns `false`.
    pub fn change_page(&mut self, movement: PageMove) -> bool {
        let info = PageInfo::of(self);
        let target = match movement {
            PageMove::First => 1,
            PageMove::Prev => {
                if !info.can_prev {
                    return false;
                }
                self.page - 1
            }
            PageMove::Next => {
                if !info.can_next {
                    return false;
                }
                self.page + 1
            }
            PageMove::Last => info.total_pages,
            PageMove::To(n) => n.clamp(1, info.total_pages),
        };
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn set_page_size(&mut self, spec: &ListSpec, size: usize) -> bool {
        if !spec.accepts_page_size(size) || size == self.page_size {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    pub fn set_total_count(&mut self, total_count: usize) -> bool {
        if self.total_count == total_count {
            return false;
        }
        self.total_count = total_count;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::spec::FilterSpec;

    const FILTERS: &[FilterSpec] = &[
        FilterSpec::with_backend_key("store", "store_ids", FilterKind::Multi),
        FilterSpec::new("status", FilterKind::Select),
        FilterSpec::new("min_quantity", FilterKind::Number),
        FilterSpec::new("start_date", FilterKind::Date),
        FilterSpec::new("search", FilterKind::Text),
    ];

    const SPEC: ListSpec = ListSpec {
        default_page_size: 50,
        page_size_options: &[25, 50, 100],
        sort_fields: &["created_at", "total_price", "order_number"],
        default_sort_field: "created_at",
        default_sort_order: SortOrder::Desc,
        filters: FILTERS,
    };

    fn populated() -> ViewState {
        let mut s = ViewState::defaults(&SPEC);
        s.set_filter(&SPEC, "store", &["1", "3"]);
        s.set_filter(&SPEC, "status", &["paid"]);
        s.set_filter(&SPEC, "min_quantity", &["2.5"]);
        s.set_filter(&SPEC, "start_date", &["2024-03-01"]);
        s.set_filter(&SPEC, "search", &["blue shirt & cap"]);
        s.sort_by_header(&SPEC, "total_price");
        s.set_page_size(&SPEC, 100);
        s.page = 4;
        s
    }

    #[test]
    fn test_defaults_from_empty_query() {
        let s = ViewState::from_query(&SPEC, "");
        assert_eq!(s, ViewState::defaults(&SPEC));
        assert_eq!(s.page, 1);
        assert_eq!(s.sort_order, SortOrder::Desc);
        assert_eq!(s.to_query(&SPEC), "");
    }

    #[test]
    fn test_roundtrip_through_url() {
        let original = populated();
        let query = original.to_query(&SPEC);
        let restored = ViewState::from_query(&SPEC, &format!("?{}", query));
        assert_eq!(restored, original);
    }

    #[test]
    fn test_roundtrip_each_filter_alone() {
        for (key, raw) in [
            ("store", vec!["7"]),
            ("status", vec!["refunded"]),
            ("min_quantity", vec!["-3"]),
            ("start_date", vec!["2023-12-31"]),
            ("search", vec!["ü+ß"]),
        ] {
            let mut s = ViewState::defaults(&SPEC);
            assert!(s.set_filter(&SPEC, key, &raw));
            let restored = ViewState::from_query(&SPEC, &s.to_query(&SPEC));
            assert_eq!(restored, s, "filter {}", key);
        }
    }

    #[test]
    fn test_roundtrip_ascending_default_page() {
        let mut s = ViewState::defaults(&SPEC);
        s.sort_order = SortOrder::Asc;
        let query = s.to_query(&SPEC);
        assert_eq!(query, "sort_order=asc");
        assert_eq!(ViewState::from_query(&SPEC, &query), s);
    }

    #[test]
    fn test_malformed_query_falls_back_to_defaults() {
        let s = ViewState::from_query(
            &SPEC,
            "?page=abc&page_size=7&sort_by=password&sort_order=sideways&min_quantity=lots&start_date=2024-13-45",
        );
        assert_eq!(s, ViewState::defaults(&SPEC));

        let zero = ViewState::from_query(&SPEC, "page=0&page_size=-1");
        assert_eq!(zero.page, 1);
        assert_eq!(zero.page_size, 50);
    }

    #[test]
    fn test_huge_page_falls_back_to_first() {
        let s = ViewState::from_query(&SPEC, "?page=18446744073709551615");
        assert_eq!(s.page, 1);
        assert_eq!(s.offset(), 0);
        assert!(s.backend_query(&SPEC).starts_with("skip=0&limit=50"));
    }

    #[test]
    fn test_offset_saturates() {
        let mut s = ViewState::defaults(&SPEC);
        s.page = usize::MAX;
        s.total_count = 10;
        assert_eq!(s.offset(), usize::MAX);
        assert_eq!(s.page_info().range_label(), "0 of 10");
    }

    #[test]
    fn test_out_of_range_year_dropped() {
        let s = ViewState::from_query(&SPEC, "start_date=-262143-01-01");
        assert_eq!(s.date("start_date"), None);
        let far = ViewState::from_query(&SPEC, "start_date=+10000-01-01");
        assert_eq!(far.date("start_date"), None);
        let ok = ViewState::from_query(&SPEC, "start_date=0001-01-01");
        assert_eq!(ok.date("start_date"), NaiveDate::from_ymd_opt(1, 1, 1));
    }

    #[test]
    fn test_repeated_params_collected() {
        let s = ViewState::from_query(&SPEC, "store=1&store=2&store=&store=1&unknown=1");
        assert_eq!(s.list("store"), vec!["1".to_string(), "2".to_string()]);
        assert_eq!(s.active_filter_count(), 1);
    }

    #[test]
    fn test_backend_query() {
        let s = populated();
        assert_eq!(
            s.backend_query(&SPEC),
            "skip=300&limit=100&sort_by=total_price&sort_order=desc&store_ids=1&store_ids=3\
             &status=paid&min_quantity=2.5&start_date=2024-03-01&search=blue%20shirt%20%26%20cap"
        );
    }

    #[test]
    fn test_sort_header_toggles_and_resets_page() {
        let mut s = ViewState::defaults(&SPEC);
        s.page = 3;
        assert!(s.sort_by_header(&SPEC, "created_at"));
        assert_eq!(s.sort_order, SortOrder::Asc);
        assert_eq!(s.page, 1);

        s.sort_by_header(&SPEC, "created_at");
        assert_eq!(s.sort_order, SortOrder::Desc);

        s.sort_order = SortOrder::Asc;
        s.page = 2;
        assert!(s.sort_by_header(&SPEC, "order_number"));
        assert_eq!(s.sort_field, "order_number");
        assert_eq!(s.sort_order, SortOrder::Desc);
        assert_eq!(s.page, 1);

        assert!(!s.sort_by_header(&SPEC, "not_a_column"));
        assert_eq!(s.sort_field, "order_number");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut s = ViewState::defaults(&SPEC);
        s.page = 5;
        assert!(s.set_filter(&SPEC, "status", &["paid"]));
        assert_eq!(s.page, 1);

        s.page = 2;
        assert!(!s.set_filter(&SPEC, "status", &["paid"]));
        assert_eq!(s.page, 2);

        assert!(s.set_filter(&SPEC, "status", &[""]));
        assert_eq!(s.text("status"), "");
        assert!(!s.set_filter(&SPEC, "nope", &["x"]));
    }

    #[test]
    fn test_number_filter_ignores_garbage() {
        let mut s = ViewState::defaults(&SPEC);
        assert!(!s.set_filter(&SPEC, "min_quantity", &["ten"]));
        assert_eq!(s.number("min_quantity"), None);
        assert!(s.set_filter(&SPEC, "min_quantity", &["10"]));
        assert_eq!(s.number("min_quantity"), Some(10.0));
        assert_eq!(s.input_value("min_quantity"), "10");
    }

    #[test]
    fn test_page_change_bounds() {
        let mut s = ViewState::defaults(&SPEC);
        s.set_total_count(120);
        assert!(!s.change_page(PageMove::Prev));
        assert!(s.change_page(PageMove::Next));
        assert!(s.change_page(PageMove::Next));
        assert_eq!(s.page, 3);
        assert!(!s.change_page(PageMove::Next));
        assert!(s.change_page(PageMove::First));
        assert_eq!(s.page, 1);
        assert!(s.change_page(PageMove::To(99)));
        assert_eq!(s.page, 3);
    }

    #[test]
    fn test_page_change_with_no_results() {
        let mut s = ViewState::defaults(&SPEC);
        s.set_total_count(0);
        assert!(!s.change_page(PageMove::Next));
        assert!(!s.change_page(PageMove::Prev));
        assert!(!s.change_page(PageMove::Last));
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_page_size_change() {
        let mut s = ViewState::defaults(&SPEC);
        s.page = 2;
        assert!(!s.set_page_size(&SPEC, 33));
        assert!(s.set_page_size(&SPEC, 25));
        assert_eq!(s.page, 1);
        assert_eq!(s.page_size, 25);
    }
}
