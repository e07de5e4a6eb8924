use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Подключённый магазин (`GET /api/config/stores`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub shop_domain: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Тело POST/PUT для магазина
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreInput {
    pub name: String,
    pub shop_domain: String,
    /// Пустой токен при редактировании означает "не менять"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub is_active: bool,
}

impl StoreInput {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    /// Trims text fields and turns blanks into `None`.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.shop_domain = self.shop_domain.trim().to_lowercase();
        self.access_token = self
            .access_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self.api_version = self
            .api_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        self.currency = self
            .currency
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());
        self
    }

    /// Минимальная проверка перед отправкой; всё остальное проверяет backend
    pub fn validate(&self, is_new: bool) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Store name is required".to_string());
        }
        let domain = self.shop_domain.trim();
        if domain.is_empty() {
            return Err("Shop domain is required".to_string());
        }
        if domain.contains(char::is_whitespace) || !domain.contains('.') {
            return Err(format!("'{}' is not a valid shop domain", domain));
        }
        if is_new && self.access_token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err("Access token is required for a new store".to_string());
        }
        Ok(())
    }
}

impl From<&Store> for StoreInput {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            shop_domain: store.shop_domain.clone(),
            access_token: None,
            api_version: store.api_version.clone(),
            currency: store.currency.clone(),
            is_active: store.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_store_payload() {
        let stores: Vec<Store> =
            serde_json::from_str(r#"[{"id":1,"name":"Main Store"}]"#).unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].name, "Main Store");
        assert!(stores[0].is_active);
        assert!(stores[0].shop_domain.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut input = StoreInput::new();
        assert!(input.validate(true).is_err());

        input.name = "Main".into();
        input.shop_domain = "main.myshopify.com".into();
        assert_eq!(
            input.validate(true),
            Err("Access token is required for a new store".to_string())
        );
        assert!(input.validate(false).is_ok());

        input.shop_domain = "not a domain".into();
        assert!(input.validate(false).is_err());
    }

    #[test]
    fn test_normalized_drops_blank_token() {
        let input = StoreInput {
            name: "  Main ".into(),
            shop_domain: " Main.MyShopify.com ".into(),
            access_token: Some("   ".into()),
            currency: Some("usd".into()),
            ..StoreInput::new()
        }
        .normalized();
        assert_eq!(input.name, "Main");
        assert_eq!(input.shop_domain, "main.myshopify.com");
        assert_eq!(input.access_token, None);
        assert_eq!(input.currency.as_deref(), Some("USD"));

        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("access_token").is_none());
    }
}
