use contracts::domain::a001_store::{Store, StoreInput};

/// Поля формы магазина в том виде, в каком их редактирует пользователь
#[derive(Debug, Clone, PartialEq)]
pub struct StoreForm {
    /// `None` - создание нового магазина
    pub editing_id: Option<i64>,
    pub name: String,
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
    pub currency: String,
    pub is_active: bool,
}

impl StoreForm {
    pub fn blank() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            shop_domain: String::new(),
            access_token: String::new(),
            api_version: String::new(),
            currency: String::new(),
            is_active: true,
        }
    }

    pub fn from_store(store: &Store) -> Self {
        let input = StoreInput::from(store);
        Self {
            editing_id: Some(store.id),
            name: input.name,
            shop_domain: input.shop_domain,
            access_token: String::new(),
            api_version: input.api_version.unwrap_or_default(),
            currency: input.currency.unwrap_or_default(),
            is_active: input.is_active,
        }
    }

    pub fn is_new(&self) -> bool {
        self.editing_id.is_none()
    }

    pub fn title(&self) -> &'static str {
        if self.is_new() {
            "New store"
        } else {
            "Edit store"
        }
    }

    /// Normalized request body, or the first validation error.
    pub fn to_input(&self) -> Result<StoreInput, String> {
        let input = StoreInput {
            name: self.name.clone(),
            shop_domain: self.shop_domain.clone(),
            access_token: Some(self.access_token.clone()),
            api_version: Some(self.api_version.clone()),
            currency: Some(self.currency.clone()),
            is_active: self.is_active,
        }
        .normalized();
        input.validate(self.is_new())?;
        Ok(input)
    }
}

/// Заменяет сохранённый магазин в списке или добавляет новый в конец
pub fn upsert_store(stores: &mut Vec<Store>, saved: Store) {
    match stores.iter_mut().find(|s| s.id == saved.id) {
        Some(existing) => *existing = saved,
        None => stores.push(saved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        serde_json::from_str(
            r#"{"id":4,"name":"Outlet","shop_domain":"outlet.myshop.com","currency":"EUR","is_active":false}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_store_requires_token() {
        let mut form = StoreForm::blank();
        form.name = " Main ".into();
        form.shop_domain = "Main.MyShop.com".into();
        assert!(form.to_input().is_err());

        form.access_token = "shpat_123".into();
        let input = form.to_input().unwrap();
        assert_eq!(input.name, "Main");
        assert_eq!(input.shop_domain, "main.myshop.com");
        assert_eq!(input.api_version, None);
    }

    #[test]
    fn test_edit_keeps_token_when_blank() {
        let form = StoreForm::from_store(&store());
        assert_eq!(form.editing_id, Some(4));
        assert_eq!(form.title(), "Edit store");
        assert!(!form.is_active);
        let input = form.to_input().unwrap();
        assert_eq!(input.access_token, None);
        assert_eq!(input.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_upsert_store() {
        let mut list = vec![store()];
        let mut renamed = store();
        renamed.name = "Outlet EU".into();
        upsert_store(&mut list, renamed);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Outlet EU");

        let mut other = store();
        other.id = 9;
        upsert_store(&mut list, other);
        assert_eq!(list.len(), 2);
    }
}
