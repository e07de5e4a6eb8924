//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{module}--{category}` (e.g. `"a003_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the module name searchable: copy the id from the
//! DOM inspector and you land in `domain/a003_order/`.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Records edited in place (stores, webhooks).
pub const PAGE_CAT_FORM: &str = "form";

/// Analytical view with cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page (sync, bulk edit, mutations).
pub const PAGE_CAT_USECASE: &str = "usecase";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_FORM,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
];

/// Validate that a page id matches the `{module}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((module, category)) => !module.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a003_order--list"));
        assert!(is_valid_page_id("u501_sync--usecase"));
        assert!(!is_valid_page_id("a003_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_order--detail"));
    }
}
