//! Универсальные утилиты для работы со списками, которые держим целиком в
//! памяти (поиск, сортировка, постраничный срез)

use crate::shared::list_view::ViewState;
use contracts::shared::SortOrder;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (уже в нижнем регистре)
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text comparison.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// `None` sorts after every value, in both directions of the base order.
pub fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_text(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if order.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Case-insensitive "contains" over optional fields.
pub fn any_contains(filter_lower: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(filter_lower))
}

/// Current page of an in-memory list, per `state.page`/`state.page_size`.
pub fn page_slice<T: Clone>(items: &[T], state: &ViewState) -> Vec<T> {
    items
        .iter()
        .skip(state.offset())
        .take(state.page_size)
        .cloned()
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListSpec;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: &'static str,
        qty: Option<f64>,
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "qty" => cmp_opt_f64(self.qty, other.qty),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter_lower: &str) -> bool {
            any_contains(filter_lower, &[Some(self.name)])
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "beta", qty: Some(2.0) },
            Item { name: "Alpha", qty: None },
            Item { name: "gamma", qty: Some(1.0) },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut list = items();
        sort_list(&mut list, "name", SortOrder::Asc);
        assert_eq!(list[0].name, "Alpha");
        sort_list(&mut list, "qty", SortOrder::Asc);
        assert_eq!(list.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["gamma", "beta", "Alpha"]);
        sort_list(&mut list, "name", SortOrder::Desc);
        assert_eq!(list[0].name, "gamma");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(&items(), "  ").len(), 3);
        let found = filter_list(&items(), "ALP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alpha");
    }

    #[test]
    fn test_page_slice() {
        const SPEC: ListSpec = ListSpec {
            default_page_size: 2,
            page_size_options: &[2],
            sort_fields: &["name"],
            default_sort_field: "name",
            default_sort_order: SortOrder::Asc,
            filters: &[],
        };
        let mut state = ViewState::defaults(&SPEC);
        assert_eq!(page_slice(&items(), &state).len(), 2);
        state.page = 2;
        assert_eq!(page_slice(&items(), &state)[0].name, "gamma");
        state.page = 3;
        assert!(page_slice(&items(), &state).is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("a", "a", true), " ▲");
        assert_eq!(get_sort_indicator("a", "a", false), " ▼");
        assert_eq!(get_sort_indicator("a", "b", true), " ⇅");
    }
}
