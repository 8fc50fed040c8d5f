//! Address-bar persistence for search filters.

use dioxus::logger::tracing;
use search_state::UrlStateStore;
use wasm_bindgen::JsValue;

/// Reads `location.search` and writes filter changes with `history.pushState`,
/// so every committed change is a back/forward step without a reload.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrlStore;

impl UrlStateStore for BrowserUrlStore {
    fn load(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn save(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        let url = if query.is_empty() { path } else { format!("{path}?{query}") };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = pushed {
            tracing::warn!("could not update address bar: {e:?}");
        }
    }
}
