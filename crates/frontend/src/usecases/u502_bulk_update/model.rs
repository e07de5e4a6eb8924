//! Строки таблицы массового редактирования: исходные значения, введённый
//! текст и отметка для сохранения.

use crate::shared::list_utils::{any_contains, Searchable};
use contracts::usecases::u502_bulk_update::{BulkUpdateResponse, VariantRow, VariantUpdate};

pub const NO_PRODUCTS: &str = "No products found.";
pub const NO_SELECTION: &str = "No products selected.";
pub const NO_CHANGES: &str = "The selected products have no changes.";
pub const NO_STORE: &str = "Select a store to load its products.";
pub const NO_MATCHES: &str = "No products match the search.";
pub const LOADING: &str = "Loading...";

const PRICE_EPSILON: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct EditableVariant {
    pub original: VariantRow,
    pub price: String,
    pub compare_at_price: String,
    pub sku: String,
    pub checked: bool,
    /// Ошибка сохранения именно этой строки
    pub error: Option<String>,
}

fn price_text(v: f64) -> String {
    format!("{:.2}", v)
}

/// Blank means "no value"; anything else must be a non-negative number.
fn parse_price(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(()),
    }
}

fn price_changed(new: f64, old: f64) -> bool {
    (new - old).abs() >= PRICE_EPSILON
}

impl EditableVariant {
    pub fn from_row(row: VariantRow) -> Self {
        Self {
            price: price_text(row.price),
            compare_at_price: row.compare_at_price.map(price_text).unwrap_or_default(),
            sku: row.sku.clone().unwrap_or_default(),
            checked: false,
            error: None,
            original: row,
        }
    }

    /// Changed fields only. Blank price or compare-at price leaves the
    /// stored value untouched.
    pub fn to_update(&self) -> Result<VariantUpdate, String> {
        let title = self.original.display_title();
        let price = parse_price(&self.price)
            .map_err(|_| format!("{}: invalid price \"{}\"", title, self.price.trim()))?
            .filter(|p| price_changed(*p, self.original.price));
        let compare_at_price = parse_price(&self.compare_at_price)
            .map_err(|_| format!("{}: invalid compare-at price \"{}\"", title, self.compare_at_price.trim()))?
            .filter(|p| match self.original.compare_at_price {
                Some(old) => price_changed(*p, old),
                None => true,
            });
        let sku = self.sku.trim();
        let sku = (sku != self.original.sku.as_deref().unwrap_or("")).then(|| sku.to_string());

        Ok(VariantUpdate {
            variant_id: self.original.variant_id,
            price,
            compare_at_price,
            sku,
        })
    }

    pub fn is_dirty(&self) -> bool {
        self.to_update().map(|u| !u.is_empty()).unwrap_or(true)
    }
}

impl Searchable for EditableVariant {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        any_contains(
            filter_lower,
            &[
                Some(self.original.product_title.as_str()),
                self.original.variant_title.as_deref(),
                self.original.sku.as_deref(),
                self.original.product_type.as_deref(),
            ],
        )
    }
}

pub fn load_rows(rows: Vec<VariantRow>) -> Vec<EditableVariant> {
    rows.into_iter().map(EditableVariant::from_row).collect()
}

/// Positions of the rows matching `search`, in list order.
pub fn visible_indices(rows: &[EditableVariant], search: &str) -> Vec<usize> {
    let filter = search.trim().to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| filter.is_empty() || row.matches_filter(&filter))
        .map(|(i, _)| i)
        .collect()
}

/// Text of the single table row shown when no row is visible.
/// Without a store nothing is fetched, so it never stays on "Loading...".
pub fn empty_message(loading: bool, loaded: bool, has_store: bool, total_rows: usize) -> &'static str {
    if loading {
        LOADING
    } else if !has_store {
        NO_STORE
    } else if !loaded {
        LOADING
    } else if total_rows == 0 {
        NO_PRODUCTS
    } else {
        NO_MATCHES
    }
}

/// "Select all" acts on the visible rows only.
pub fn set_checked(rows: &mut [EditableVariant], indices: &[usize], checked: bool) {
    for &i in indices {
        if let Some(row) = rows.get_mut(i) {
            row.checked = checked;
        }
    }
}

pub fn checked_count(rows: &[EditableVariant], indices: &[usize]) -> usize {
    indices
        .iter()
        .filter(|&&i| rows.get(i).is_some_and(|r| r.checked))
        .count()
}

/// Updates for the checked rows that actually changed.
pub fn build_updates(rows: &[EditableVariant]) -> Result<Vec<VariantUpdate>, String> {
    let checked: Vec<&EditableVariant> = rows.iter().filter(|r| r.checked).collect();
    if checked.is_empty() {
        return Err(NO_SELECTION.to_string());
    }
    let mut updates = Vec::new();
    for row in checked {
        let update = row.to_update()?;
        if !update.is_empty() {
            updates.push(update);
        }
    }
    if updates.is_empty() {
        return Err(NO_CHANGES.to_string());
    }
    Ok(updates)
}

/// Folds the save result back into the rows: saved rows take the new
/// values as their baseline and are unchecked, failed rows keep their
/// edits and get the error text.
pub fn apply_save_result(rows: &mut [EditableVariant], sent: &[VariantUpdate], response: &BulkUpdateResponse) {
    for update in sent {
        let Some(row) = rows.iter_mut().find(|r| r.original.variant_id == update.variant_id) else {
            continue;
        };
        match response.failed.iter().find(|f| f.variant_id == update.variant_id) {
            Some(failure) => {
                row.error = Some(if failure.detail.is_empty() {
                    "Update failed".to_string()
                } else {
                    failure.detail.clone()
                });
            }
            None => {
                if let Some(price) = update.price {
                    row.original.price = price;
                }
                if let Some(compare_at) = update.compare_at_price {
                    row.original.compare_at_price = Some(compare_at);
                }
                if let Some(sku) = &update.sku {
                    row.original.sku = (!sku.is_empty()).then(|| sku.clone());
                }
                row.error = None;
                row.checked = false;
            }
        }
    }
}

pub fn save_summary(response: &BulkUpdateResponse) -> String {
    if let Some(message) = response.message.as_ref().filter(|m| !m.is_empty()) {
        return message.clone();
    }
    if response.failed.is_empty() {
        format!("Updated {} variants.", response.updated)
    } else {
        format!("Updated {} variants, {} failed.", response.updated, response.failed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_bulk_update::BulkUpdateFailure;

    fn row(id: i64, title: &str, price: f64, sku: Option<&str>) -> VariantRow {
        VariantRow {
            variant_id: id,
            product_id: id * 10,
            product_title: title.into(),
            variant_title: None,
            sku: sku.map(str::to_string),
            product_type: Some("Apparel".into()),
            price,
            compare_at_price: None,
            inventory_quantity: 3,
        }
    }

    fn rows() -> Vec<EditableVariant> {
        load_rows(vec![
            row(1, "Shirt", 20.0, Some("SH-1")),
            row(2, "Mug", 8.5, None),
            row(3, "Cap", 12.0, Some("CAP")),
        ])
    }

    #[test]
    fn test_loaded_rows_are_clean() {
        let rows = rows();
        assert_eq!(rows[1].price, "8.50");
        assert_eq!(rows[1].compare_at_price, "");
        assert!(rows.iter().all(|r| !r.is_dirty() && !r.checked));
    }

    #[test]
    fn test_nothing_checked() {
        assert_eq!(build_updates(&rows()), Err(NO_SELECTION.to_string()));
        assert_eq!(build_updates(&[]), Err(NO_SELECTION.to_string()));
    }

    #[test]
    fn test_checked_without_changes() {
        let mut rows = rows();
        rows[0].checked = true;
        assert_eq!(build_updates(&rows), Err(NO_CHANGES.to_string()));
    }

    #[test]
    fn test_only_changed_fields_are_sent() {
        let mut rows = rows();
        rows[0].price = "22,00".into();
        rows[0].checked = true;
        rows[1].sku = " MUG-1 ".into();
        rows[1].compare_at_price = "10".into();
        rows[1].checked = true;
        // изменена, но не отмечена
        rows[2].price = "1".into();

        let updates = build_updates(&rows).unwrap();
        assert_eq!(
            updates,
            vec![
                VariantUpdate { variant_id: 1, price: Some(22.0), compare_at_price: None, sku: None },
                VariantUpdate {
                    variant_id: 2,
                    price: None,
                    compare_at_price: Some(10.0),
                    sku: Some("MUG-1".into()),
                },
            ]
        );
    }

    #[test]
    fn test_invalid_price() {
        let mut rows = rows();
        rows[2].price = "abc".into();
        rows[2].checked = true;
        assert_eq!(build_updates(&rows), Err("Cap: invalid price \"abc\"".to_string()));
        rows[2].price = "-1".into();
        assert!(build_updates(&rows).is_err());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(true, false, true, 0), LOADING);
        assert_eq!(empty_message(false, false, true, 0), LOADING);
        assert_eq!(empty_message(false, true, true, 0), NO_PRODUCTS);
        assert_eq!(empty_message(false, true, true, 4), NO_MATCHES);
    }

    #[test]
    fn test_empty_message_without_store() {
        // нет магазинов или их загрузка упала
        assert_eq!(empty_message(false, false, false, 0), NO_STORE);
        assert_eq!(empty_message(true, false, false, 0), LOADING);
    }

    #[test]
    fn test_search_and_select_visible() {
        let mut rows = rows();
        let visible = visible_indices(&rows, "sh-");
        assert_eq!(visible, vec![0]);
        assert_eq!(visible_indices(&rows, "  ").len(), 3);
        assert_eq!(visible_indices(&rows, "apparel").len(), 3);

        set_checked(&mut rows, &visible, true);
        assert_eq!(checked_count(&rows, &[0, 1, 2]), 1);
        set_checked(&mut rows, &[0, 1, 2, 9], true);
        assert_eq!(checked_count(&rows, &[0, 1, 2]), 3);
    }

    #[test]
    fn test_apply_save_result() {
        let mut rows = rows();
        rows[0].price = "25".into();
        rows[0].checked = true;
        rows[2].sku = "CAP-2".into();
        rows[2].checked = true;
        let sent = build_updates(&rows).unwrap();
        let response = BulkUpdateResponse {
            message: None,
            updated: 1,
            failed: vec![BulkUpdateFailure { variant_id: 3, detail: "SKU already taken".into() }],
        };

        apply_save_result(&mut rows, &sent, &response);
        assert_eq!(rows[0].original.price, 25.0);
        assert!(!rows[0].checked && !rows[0].is_dirty());
        assert_eq!(rows[2].error.as_deref(), Some("SKU already taken"));
        assert!(rows[2].checked && rows[2].is_dirty());
        assert_eq!(save_summary(&response), "Updated 1 variants, 1 failed.");
    }
}
