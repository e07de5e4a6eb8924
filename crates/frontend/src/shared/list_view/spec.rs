use contracts::shared::SortOrder;

/// Как фильтр читается из URL и пишется в запрос
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, bound to a debounced search input.
    Text,
    /// One value picked from a dropdown.
    Select,
    /// Repeated parameter, e.g. `store_ids=1&store_ids=2`.
    Multi,
    /// Finite number; anything unparsable is dropped.
    Number,
    /// `YYYY-MM-DD`; anything unparsable is dropped.
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Key in the page URL.
    pub key: &'static str,
    /// Key in the backend request.
    pub backend_key: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub const fn new(key: &'static str, kind: FilterKind) -> Self {
        Self {
            key,
            backend_key: key,
            kind,
        }
    }

    pub const fn with_backend_key(
        key: &'static str,
        backend_key: &'static str,
        kind: FilterKind,
    ) -> Self {
        Self {
            key,
            backend_key,
            kind,
        }
    }
}

/// Static description of one list page: what may appear in its URL and
/// what the defaults are.
#[derive(Debug, Clone, Copy)]
pub struct ListSpec {
    pub default_page_size: usize,
    pub page_size_options: &'static [usize],
    pub sort_fields: &'static [&'static str],
    pub default_sort_field: &'static str,
    /// Order used on first load and whenever a different column is picked.
    pub default_sort_order: SortOrder,
    pub filters: &'static [FilterSpec],
}

impl ListSpec {
    pub fn filter(&self, key: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sort_fields.contains(&field)
    }

    pub fn accepts_page_size(&self, size: usize) -> bool {
        size > 0 && (self.page_size_options.contains(&size) || size == self.default_page_size)
    }
}
