use super::state::ViewState;

/// Куда двигаемся по страницам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Prev,
    Next,
    Last,
    To(usize),
}

/// Derived pager model: what the pagination controls show and enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl PageInfo {
    pub fn of(state: &ViewState) -> Self {
        Self::compute(state.page, state.page_size, state.total_count)
    }

    /// An empty result still counts as one page.
    pub fn compute(page: usize, page_size: usize, total_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size).max(1);
        let page = page.max(1);
        Self {
            page,
            total_pages,
            total_count,
            page_size,
            can_prev: page > 1,
            can_next: page < total_pages,
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// "51–100 of 120"; "0 of 0" for an empty result.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "0 of 0".to_string();
        }
        let first = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        if first > self.total_count {
            return format!("0 of {}", self.total_count);
        }
        let last = first
            .saturating_add(self.page_size - 1)
            .min(self.total_count);
        format!("{}–{} of {}", first, last, self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_results_is_page_one_of_one() {
        let info = PageInfo::compute(1, 50, 0);
        assert_eq!(info.label(), "Page 1 of 1");
        assert!(!info.can_prev);
        assert!(!info.can_next);
        assert_eq!(info.range_label(), "0 of 0");
    }

    #[test]
    fn test_middle_page() {
        let info = PageInfo::compute(2, 50, 120);
        assert_eq!(info.total_pages, 3);
        assert!(info.can_prev);
        assert!(info.can_next);
        assert_eq!(info.range_label(), "51–100 of 120");
    }

    #[test]
    fn test_last_page() {
        let info = PageInfo::compute(3, 50, 120);
        assert!(!info.can_next);
        assert_eq!(info.range_label(), "101–120 of 120");
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(PageInfo::compute(1, 25, 100).total_pages, 4);
        assert_eq!(PageInfo::compute(1, 25, 101).total_pages, 5);
    }

    #[test]
    fn test_page_beyond_results() {
        let info = PageInfo::compute(9, 50, 120);
        assert!(!info.can_next);
        assert!(info.can_prev);
        assert_eq!(info.range_label(), "0 of 120");
    }
}
