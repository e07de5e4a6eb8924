use serde::{Deserialize, Serialize};

/// Шаг агрегации временного ряда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Week, Granularity::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "Daily",
            Granularity::Week => "Weekly",
            Granularity::Month => "Monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default)]
    pub gross_sales: f64,
    #[serde(default)]
    pub discounts: f64,
    #[serde(default)]
    pub refunds: f64,
    #[serde(default)]
    pub net_sales: f64,
    #[serde(default)]
    pub order_count: i64,
    #[serde(default)]
    pub units_sold: i64,
    #[serde(default)]
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Начало периода, `YYYY-MM-DD`
    pub period: String,
    #[serde(default)]
    pub gross_sales: f64,
    #[serde(default)]
    pub net_sales: f64,
    #[serde(default)]
    pub order_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub title: String,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub units_sold: i64,
    #[serde(default)]
    pub net_sales: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesAnalyticsResponse {
    #[serde(default)]
    pub summary: SalesSummary,
    #[serde(default)]
    pub series: Vec<SalesPoint>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("week"), Some(Granularity::Week));
        assert_eq!(Granularity::parse("hour"), None);
    }

    #[test]
    fn test_decode_partial_response() {
        let resp: SalesAnalyticsResponse = serde_json::from_str(
            r#"{"summary":{"net_sales":10.5},"series":[{"period":"2024-03-01","net_sales":10.5}]}"#,
        )
        .unwrap();
        assert_eq!(resp.summary.net_sales, 10.5);
        assert_eq!(resp.series.len(), 1);
        assert!(resp.top_products.is_empty());
    }
}
