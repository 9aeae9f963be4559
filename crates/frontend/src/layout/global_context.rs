use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Key of the page shown when the URL names none.
pub const DEFAULT_PAGE: &str = "a101_warehouse";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page in the center zone (see `registry::render_page`)
    pub active: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
        }
    }

    /// Restores the active page from `?active=` and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_search(&search) {
            self.open(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_active(&this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, key: &str) {
        log::debug!("open page '{}'", key);
        self.active.set(key.to_string());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

fn search_for_active(key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}
