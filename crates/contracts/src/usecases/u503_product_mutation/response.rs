use serde::{Deserialize, Serialize};

/// Ошибка уровня GraphQL (синтаксис, доступ, throttling)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Ошибка валидации бизнес-данных (`userErrors` платформы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationUserError {
    #[serde(default)]
    pub field: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<MutationError>,
    #[serde(default)]
    pub user_errors: Vec<MutationUserError>,
}

impl MutationResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.user_errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let ok: MutationResult =
            serde_json::from_str(r#"{"data":{"productUpdate":{"product":{"id":"1"}}}}"#).unwrap();
        assert!(ok.is_success());

        let failed: MutationResult = serde_json::from_str(
            r#"{"data":null,"user_errors":[{"field":["title"],"message":"Title can't be blank"}]}"#,
        )
        .unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.user_errors[0].field, vec!["title".to_string()]);
    }
}
