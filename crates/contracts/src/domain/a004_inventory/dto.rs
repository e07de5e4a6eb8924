use serde::{Deserialize, Serialize};

/// Остаток варианта товара на локации (`GET /api/dashboard/inventory`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub variant_id: i64,
    pub product_id: i64,
    pub product_title: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    pub store_id: i64,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub available: i64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    Healthy,
}

impl InventoryRow {
    pub fn stock_level(&self, low_threshold: i64) -> StockLevel {
        if self.available <= 0 {
            StockLevel::OutOfStock
        } else if self.available <= low_threshold {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }

    /// Stock value at cost, falling back to price when cost is unknown.
    pub fn stock_value(&self) -> f64 {
        let unit = self.cost.or(self.price).unwrap_or(0.0);
        unit * self.available.max(0) as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryMetrics {
    #[serde(default)]
    pub sku_count: i64,
    #[serde(default)]
    pub total_units: i64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub low_stock_count: i64,
    #[serde(default)]
    pub out_of_stock_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryListResponse {
    #[serde(default)]
    pub items: Vec<InventoryRow>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub metrics: InventoryMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(available: i64) -> InventoryRow {
        InventoryRow {
            variant_id: 1,
            product_id: 1,
            product_title: "Mug".into(),
            variant_title: None,
            sku: None,
            product_type: None,
            store_id: 1,
            store_name: None,
            location_name: None,
            available,
            price: Some(12.0),
            cost: None,
        }
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(row(0).stock_level(5), StockLevel::OutOfStock);
        assert_eq!(row(-2).stock_level(5), StockLevel::OutOfStock);
        assert_eq!(row(5).stock_level(5), StockLevel::Low);
        assert_eq!(row(6).stock_level(5), StockLevel::Healthy);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(row(3).stock_value(), 36.0);
        assert_eq!(row(-3).stock_value(), 0.0);
    }
}
