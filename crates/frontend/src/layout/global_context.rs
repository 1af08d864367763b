use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    CsvExchange,
    Inventory,
    Riders,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::CsvExchange, Page::Inventory, Page::Riders];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::CsvExchange => "import",
            Page::Inventory => "inventory",
            Page::Riders => "riders",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::CsvExchange => "Import",
            Page::Inventory => "Magazzino",
            Page::Riders => "Rider",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::CsvExchange => "import-export",
            Page::Inventory => "inventory",
            Page::Riders => "riders",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, page: Page) {
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Keeps the active page in the `?page=` query parameter so reloads land
    /// on the same screen.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([("page", page.key())]))
                .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
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
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Page named by `?page=...`; unknown or missing keys give `None`.
pub fn page_from_search(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}
