//! Runtime configuration of the frontend.
//!
//! Values come from `<meta>` tags in `index.html` so one build can be
//! pointed at different backends:
//!
//! ```html
//! <meta name="backoffice-api-base" content="https://api.example.com">
//! <meta name="backoffice-debounce-ms" content="400">
//! <meta name="backoffice-poll-ms" content="2000">
//! ```

use once_cell::sync::OnceCell;
use web_sys::window;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 400;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
/// Порт backend, если база API не задана явно
pub const BACKEND_PORT: u16 = 3000;

const META_API_BASE: &str = "backoffice-api-base";
const META_DEBOUNCE_MS: &str = "backoffice-debounce-ms";
const META_POLL_MS: &str = "backoffice-poll-ms";
const META_LOW_STOCK: &str = "backoffice-low-stock";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend, without trailing slash.
    pub api_base: String,
    pub search_debounce_ms: u32,
    pub poll_interval_ms: u32,
    pub low_stock_threshold: i64,
}

/// Raw, unvalidated values as read from the page.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub api_base: Option<String>,
    pub debounce_ms: Option<String>,
    pub poll_ms: Option<String>,
    pub low_stock: Option<String>,
}

impl AppConfig {
    /// Validates raw values; bad or missing ones fall back to defaults.
    pub fn resolve(raw: RawConfig, fallback_base: String) -> Self {
        let api_base = raw
            .api_base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or(fallback_base);

        let search_debounce_ms = raw
            .debounce_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| (100..=2000).contains(v))
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

        let poll_interval_ms = raw
            .poll_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| (500..=60_000).contains(v))
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        let low_stock_threshold = raw
            .low_stock
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v >= 0)
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);

        Self {
            api_base,
            search_debounce_ms,
            poll_interval_ms,
            low_stock_threshold,
        }
    }

    pub fn from_document() -> Self {
        let raw = RawConfig {
            api_base: meta_content(META_API_BASE),
            debounce_ms: meta_content(META_DEBOUNCE_MS),
            poll_ms: meta_content(META_POLL_MS),
            low_stock: meta_content(META_LOW_STOCK),
        };
        Self::resolve(raw, location_api_base())
    }
}

/// Process-wide configuration, read from the document on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = AppConfig::from_document();
        log::info!("frontend config: {:?}", config);
        config
    })
}

fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}

/// `{protocol}//{hostname}:3000` of the current page; empty outside a browser.
fn location_api_base() -> String {
    let Some(w) = window() else {
        return String::new();
    };
    let location = w.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::resolve(RawConfig::default(), "http://localhost:3000".into());
        assert_eq!(cfg.api_base, "http://localhost:3000");
        assert_eq!(cfg.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(cfg.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(cfg.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn test_overrides() {
        let raw = RawConfig {
            api_base: Some("https://api.example.com/".into()),
            debounce_ms: Some("300".into()),
            poll_ms: Some("2500".into()),
            low_stock: Some("10".into()),
        };
        let cfg = AppConfig::resolve(raw, String::new());
        assert_eq!(cfg.api_base, "https://api.example.com");
        assert_eq!(cfg.search_debounce_ms, 300);
        assert_eq!(cfg.poll_interval_ms, 2500);
        assert_eq!(cfg.low_stock_threshold, 10);
    }

    #[test]
    fn test_out_of_range_values_ignored() {
        let raw = RawConfig {
            api_base: Some("   ".into()),
            debounce_ms: Some("5".into()),
            poll_ms: Some("fast".into()),
            low_stock: Some("-1".into()),
        };
        let cfg = AppConfig::resolve(raw, "http://h:3000".into());
        assert_eq!(cfg.api_base, "http://h:3000");
        assert_eq!(cfg.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(cfg.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(cfg.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
