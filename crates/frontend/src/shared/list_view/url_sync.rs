//! Связка `ViewState` ↔ адресная строка браузера.

use super::spec::ListSpec;
use super::state::ViewState;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Current `location.search`, including the leading `?` (empty outside a browser).
pub fn read_location_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replaces the current history entry with `pathname?query` without
/// navigating. Does nothing when the URL already matches.
pub fn replace_location_query(query: &str) {
    let Some(w) = window() else { return };
    let location = w.location();

    let wanted = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };
    let current = location.search().unwrap_or_default();
    if current == wanted {
        return;
    }

    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let new_url = format!("{}{}", path, wanted);
    match w.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                log::warn!("replaceState failed for {}: {:?}", new_url, e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}

/// Creates the page's state signal from the current URL and keeps the URL
/// in step with every later change.
pub fn create_url_state(spec: &'static ListSpec) -> RwSignal<ViewState> {
    let initial = ViewState::from_query(spec, &read_location_query());
    log::debug!("list state restored from url: {:?}", initial);
    let state = RwSignal::new(initial);

    Effect::new(move |_| {
        let query = state.with(|s| s.to_query(spec));
        replace_location_query(&query);
    });

    state
}
