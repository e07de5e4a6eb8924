use serde::{Deserialize, Serialize};

/// Статус прогноза остатков, рассчитанный backend по скорости продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    Critical,
    Low,
    Ok,
    Overstock,
    NoSales,
    #[serde(other)]
    Unknown,
}

impl ForecastStatus {
    pub const FILTERABLE: [ForecastStatus; 5] = [
        ForecastStatus::Critical,
        ForecastStatus::Low,
        ForecastStatus::Ok,
        ForecastStatus::Overstock,
        ForecastStatus::NoSales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastStatus::Critical => "critical",
            ForecastStatus::Low => "low",
            ForecastStatus::Ok => "ok",
            ForecastStatus::Overstock => "overstock",
            ForecastStatus::NoSales => "no_sales",
            ForecastStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastStatus::Critical => "Critical",
            ForecastStatus::Low => "Low",
            ForecastStatus::Ok => "OK",
            ForecastStatus::Overstock => "Overstock",
            ForecastStatus::NoSales => "No sales",
            ForecastStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.as_str() == value)
    }

    /// Порядок "от срочного к спокойному", для сортировки по статусу
    pub fn urgency(&self) -> u8 {
        match self {
            ForecastStatus::Critical => 0,
            ForecastStatus::Low => 1,
            ForecastStatus::Ok => 2,
            ForecastStatus::Overstock => 3,
            ForecastStatus::NoSales => 4,
            ForecastStatus::Unknown => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    pub variant_id: i64,
    #[serde(default)]
    pub sku: Option<String>,
    pub product_title: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub avg_daily_sales: f64,
    /// `None`, если продаж за окно не было
    #[serde(default)]
    pub days_of_stock: Option<f64>,
    #[serde(default)]
    pub reorder_quantity: i64,
    pub status: ForecastStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_decodes() {
        let item: ForecastItem = serde_json::from_str(
            r#"{"variant_id":5,"product_title":"Cap","status":"discontinued"}"#,
        )
        .unwrap();
        assert_eq!(item.status, ForecastStatus::Unknown);
        assert_eq!(item.days_of_stock, None);
    }

    #[test]
    fn test_parse_only_filterable() {
        assert_eq!(ForecastStatus::parse("no_sales"), Some(ForecastStatus::NoSales));
        assert_eq!(ForecastStatus::parse("unknown"), None);
    }
}
