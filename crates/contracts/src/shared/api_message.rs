use serde::{Deserialize, Serialize};

/// Ответ backend на write-операции без собственного ресурса (`{ message, detail }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiMessage {
    /// Text suitable for a toast, falling back to `default` when the body carried nothing.
    pub fn text_or(&self, default: &str) -> String {
        self.message
            .as_deref()
            .or(self.detail.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or_prefers_message() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"message":"Store deleted","detail":"id=3"}"#).unwrap();
        assert_eq!(msg.text_or("Done"), "Store deleted");
    }

    #[test]
    fn test_text_or_falls_back() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.text_or("Done"), "Done");

        let detail_only: ApiMessage = serde_json::from_str(r#"{"detail":"queued"}"#).unwrap();
        assert_eq!(detail_only.text_or("Done"), "queued");
    }
}
