use contracts::usecases::u503_product_mutation::{MutationRequest, MutationResult, MutationUserError};
use serde_json::Value;

/// Text shown in the variables editor for a template.
pub fn variables_text(variables: &Value) -> String {
    if variables.is_null() {
        return "{}".to_string();
    }
    serde_json::to_string_pretty(variables).unwrap_or_else(|_| "{}".to_string())
}

/// Variables must be a JSON object; blank input means `{}`.
pub fn parse_variables(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Variables are not valid JSON: {}", e))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("Variables must be a JSON object.".to_string())
    }
}

/// Checks the form before anything is sent.
pub fn build_request(store_id: Option<i64>, query: &str, variables: &str) -> Result<MutationRequest, String> {
    let store_id = store_id.ok_or_else(|| "Select a store first.".to_string())?;
    let query = query.trim();
    if query.is_empty() {
        return Err("The mutation is empty.".to_string());
    }
    Ok(MutationRequest {
        store_id,
        query: query.to_string(),
        variables: parse_variables(variables)?,
    })
}

pub fn user_error_text(error: &MutationUserError) -> String {
    if error.field.is_empty() {
        error.message.clone()
    } else {
        format!("{}: {}", error.field.join("."), error.message)
    }
}

pub fn data_text(result: &MutationResult) -> Option<String> {
    result
        .data
        .as_ref()
        .filter(|d| !d.is_null())
        .and_then(|d| serde_json::to_string_pretty(d).ok())
}

pub fn result_headline(result: &MutationResult) -> String {
    if result.is_success() {
        return "Mutation executed.".to_string();
    }
    let problems = result.errors.len() + result.user_errors.len();
    if problems == 1 {
        "Mutation returned 1 error.".to_string()
    } else {
        format!("Mutation returned {} errors.", problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_variables() {
        assert_eq!(parse_variables("  "), Ok(json!({})));
        assert_eq!(parse_variables(r#"{"id":"gid://1"}"#), Ok(json!({"id": "gid://1"})));
        assert_eq!(parse_variables("[1]"), Err("Variables must be a JSON object.".to_string()));
        assert!(parse_variables("{id:").unwrap_err().starts_with("Variables are not valid JSON"));
    }

    #[test]
    fn test_build_request() {
        assert_eq!(build_request(None, "mutation {}", "{}"), Err("Select a store first.".to_string()));
        assert_eq!(build_request(Some(1), "  ", "{}"), Err("The mutation is empty.".to_string()));
        assert!(build_request(Some(1), "mutation {}", "nope").is_err());

        let request = build_request(Some(4), " mutation { x } ", "").unwrap();
        assert_eq!(request.store_id, 4);
        assert_eq!(request.query, "mutation { x }");
        assert_eq!(request.variables, json!({}));
    }

    #[test]
    fn test_variables_text() {
        assert_eq!(variables_text(&Value::Null), "{}");
        assert_eq!(variables_text(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_result_rendering() {
        let result: MutationResult = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"Throttled"}],"user_errors":[{"field":["input","title"],"message":"can't be blank"},{"message":"Invalid"}]}"#,
        )
        .unwrap();
        assert_eq!(data_text(&result), None);
        assert_eq!(result_headline(&result), "Mutation returned 3 errors.");
        assert_eq!(user_error_text(&result.user_errors[0]), "input.title: can't be blank");
        assert_eq!(user_error_text(&result.user_errors[1]), "Invalid");

        let ok = MutationResult {
            data: Some(json!({"ok": true})),
            ..Default::default()
        };
        assert_eq!(result_headline(&ok), "Mutation executed.");
        assert_eq!(data_text(&ok).as_deref(), Some("{\n  \"ok\": true\n}"));
    }
}
