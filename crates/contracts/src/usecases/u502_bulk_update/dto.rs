use serde::{Deserialize, Serialize};

/// Вариант товара в таблице массового редактирования (`GET /api/bulk/variants`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRow {
    pub variant_id: i64,
    pub product_id: i64,
    pub product_title: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default)]
    pub inventory_quantity: i64,
}

impl VariantRow {
    /// "Product / Variant", skipping the platform's placeholder title.
    pub fn display_title(&self) -> String {
        match self.variant_title.as_deref() {
            Some(v) if !v.is_empty() && v != "Default Title" => {
                format!("{} / {}", self.product_title, v)
            }
            _ => self.product_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title() {
        let mut row: VariantRow = serde_json::from_str(
            r#"{"variant_id":1,"product_id":2,"product_title":"Shirt","variant_title":"Default Title"}"#,
        )
        .unwrap();
        assert_eq!(row.display_title(), "Shirt");
        row.variant_title = Some("XL".into());
        assert_eq!(row.display_title(), "Shirt / XL");
    }
}
