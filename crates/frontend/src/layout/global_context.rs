use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level views of the application
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportTab {
    #[default]
    Dashboard,
    SalesByRegion,
    SalesByChannel,
    AgentPerformance,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Dashboard,
        ReportTab::SalesByRegion,
        ReportTab::SalesByChannel,
        ReportTab::AgentPerformance,
    ];

    /// Value of the `?active=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            ReportTab::Dashboard => "dashboard",
            ReportTab::SalesByRegion => "sales-by-region",
            ReportTab::SalesByChannel => "sales-by-channel",
            ReportTab::AgentPerformance => "agent-performance",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportTab::Dashboard => "Dashboard",
            ReportTab::SalesByRegion => "Sales by Region",
            ReportTab::SalesByChannel => "Sales by Channel",
            ReportTab::AgentPerformance => "Agent Performance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Tab named by `?active=` in a location search string, if any
pub fn tab_from_search(search: &str) -> Option<ReportTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| ReportTab::from_key(key))
}

pub fn search_for_tab(tab: ReportTab) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", tab.key())])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ReportTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ReportTab::default()),
        }
    }

    pub fn activate_tab(&self, tab: ReportTab) {
        log::debug!("activate_tab: {}", tab.key());
        self.active.set(tab);
    }

    /// Restore the active tab from the URL, then keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_search(&search) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_tab(this.active.get());

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys_round_trip() {
        for tab in ReportTab::ALL {
            assert_eq!(ReportTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(ReportTab::from_key("orders"), None);
    }

    #[test]
    fn test_tab_from_search() {
        assert_eq!(
            tab_from_search("?active=agent-performance"),
            Some(ReportTab::AgentPerformance)
        );
        assert_eq!(tab_from_search(""), None);
        assert_eq!(tab_from_search("?active=unknown"), None);
        assert_eq!(search_for_tab(ReportTab::SalesByChannel), "?active=sales-by-channel");
    }
}
