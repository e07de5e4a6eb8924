//! API utilities for frontend-backend communication
//!
//! Every request goes through the helpers below so that failures reach the
//! pages in one shape: [`ApiError`], whose `Display` is the text shown to
//! the user.

use crate::shared::config::app_config;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
pub fn api_base() -> String {
    app_config().api_base.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(endpoints::STORES);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Failed to fetch: {0}")]
    Network(String),
    /// Non-2xx response; `message` is taken from the body when possible.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Picks a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}`, validation lists
/// `{"detail": [{"msg": "..."}]}` and `{"message": "..."}`; anything else
/// gets a generic text with the status code.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let generic = format!("Request failed with status {}", status);
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return generic;
    };

    match value.get("detail") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => return s.clone(),
        Some(serde_json::Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if !msgs.is_empty() {
                return msgs.join("; ");
            }
        }
        _ => {}
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(generic)
}

/// Decodes a successful body. An empty body (e.g. 204) decodes as `null`
/// or `{}`, whichever `T` accepts.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    if text.trim().is_empty() {
        return serde_json::from_str("null")
            .or_else(|_| serde_json::from_str("{}"))
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_response<T: DeserializeOwned>(
    method: &str,
    url: &str,
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !ok {
        let message = error_message_from_body(status, &text);
        log::warn!("{} {} -> {}: {}", method, url, status, message);
        return Err(ApiError::Http { status, message });
    }

    decode_body(&text).map_err(|e| {
        log::warn!("{} {} -> undecodable body: {}", method, url, e);
        e
    })
}

async fn send_request<T: DeserializeOwned>(
    method: &str,
    url: &str,
    request: Request,
) -> Result<T, ApiError> {
    log::debug!("{} {}", method, url);
    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;
    read_response(method, url, response).await
}

async fn send_empty<T: DeserializeOwned>(
    method: &str,
    url: &str,
    builder: RequestBuilder,
) -> Result<T, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send_request(method, url, request).await
}

async fn send_with_body<B: Serialize, T: DeserializeOwned>(
    method: &str,
    url: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send_request(method, url, request).await
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send_empty("GET", url, Request::get(url)).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body("POST", url, Request::post(url), body).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body("PUT", url, Request::put(url), body).await
}

/// POST without a body (action endpoints such as "test connection").
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send_empty("POST", url, Request::post(url)).await
}

pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send_empty("DELETE", url, Request::delete(url)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ApiMessage;

    #[test]
    fn test_detail_string() {
        assert_eq!(
            error_message_from_body(404, r#"{"detail":"Store not found"}"#),
            "Store not found"
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","price"],"msg":"value is not a valid float"},{"msg":"field required"}]}"#;
        assert_eq!(
            error_message_from_body(422, body),
            "value is not a valid float; field required"
        );
    }

    #[test]
    fn test_message_field() {
        assert_eq!(
            error_message_from_body(409, r#"{"message":"Sync already running"}"#),
            "Sync already running"
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(
            error_message_from_body(502, "<html>Bad gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(
            error_message_from_body(500, r#"{"detail":""}"#),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Http {
            status: 400,
            message: "Invalid price".into(),
        };
        assert_eq!(err.to_string(), "Invalid price");
        assert_eq!(err.status(), Some(400));
        assert!(ApiError::Network("TypeError".into())
            .to_string()
            .starts_with("Failed to fetch"));
    }

    #[test]
    fn test_decode_empty_body() {
        let msg: ApiMessage = decode_body("").unwrap();
        assert_eq!(msg, ApiMessage::default());
        let none: Option<Vec<i64>> = decode_body(" ").unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn test_decode_bad_body() {
        let result: Result<Vec<i64>, ApiError> = decode_body("{oops");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
