use leptos::prelude::*;

/// Состояние оболочки приложения, общее для всех страниц
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context provided by [`crate::app::App`]; a fresh one outside of it.
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::warn!("AppGlobalContext not provided, using a local one");
        AppGlobalContext::new()
    })
}
