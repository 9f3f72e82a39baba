//! In-process stand-in for a page: a document head and a global namespace held in memory.
//!
//! This is the context object hosts pass around on targets without a DOM, and the page used by
//! the tests. A `MemoryPage` created with [`MemoryPage::server`] reports a non-browser context.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::gtag::error::{global_scope_error, tracker_unbound, GtagResult};
use crate::gtag::{DataLayer, GtagCommand, PageScope, ScriptTag, Tracker};

#[derive(Clone, Debug)]
enum GlobalValue {
    DataLayer(DataLayer),
    Tracker(Tracker),
}

#[derive(Debug, Default)]
struct PageState {
    head: Vec<ScriptTag>,
    globals: BTreeMap<String, GlobalValue>,
}

/// Clones share the same head and globals.
#[derive(Clone, Debug)]
pub struct MemoryPage {
    browser: bool,
    state: Arc<Mutex<PageState>>,
}

impl MemoryPage {
    pub fn browser() -> Self {
        Self::new(true)
    }

    pub fn server() -> Self {
        Self::new(false)
    }

    fn new(browser: bool) -> Self {
        Self {
            browser,
            state: Arc::new(Mutex::new(PageState::default())),
        }
    }

    pub fn head_scripts(&self) -> Vec<ScriptTag> {
        self.state.lock().unwrap().head.clone()
    }

    pub fn global_names(&self) -> Vec<String> {
        self.state.lock().unwrap().globals.keys().cloned().collect()
    }

    pub fn data_layer(&self, name: &str) -> Option<DataLayer> {
        match self.state.lock().unwrap().globals.get(name) {
            Some(GlobalValue::DataLayer(layer)) => Some(layer.clone()),
            _ => None,
        }
    }

    pub fn tracker(&self, name: &str) -> Option<Tracker> {
        match self.state.lock().unwrap().globals.get(name) {
            Some(GlobalValue::Tracker(tracker)) => Some(tracker.clone()),
            _ => None,
        }
    }

    /// Stores `layer` under `name`, as another tag on the page would have done.
    pub fn set_data_layer(&self, name: impl Into<String>, layer: DataLayer) {
        self.state
            .lock()
            .unwrap()
            .globals
            .insert(name.into(), GlobalValue::DataLayer(layer));
    }
}

impl PageScope for MemoryPage {
    fn is_browser(&self) -> bool {
        self.browser
    }

    fn append_head_script(&self, script: &ScriptTag) -> GtagResult<()> {
        self.state.lock().unwrap().head.push(script.clone());
        Ok(())
    }

    fn ensure_data_layer(&self, name: &str) -> GtagResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.globals.get(name) {
            Some(GlobalValue::DataLayer(_)) => Ok(()),
            Some(GlobalValue::Tracker(_)) => Err(global_scope_error(format!(
                "`{name}` is already bound to a tracking function"
            ))),
            None => {
                state
                    .globals
                    .insert(name.to_string(), GlobalValue::DataLayer(DataLayer::new()));
                Ok(())
            }
        }
    }

    fn bind_tracker(&self, function_name: &str, data_layer_name: &str) -> GtagResult<()> {
        let mut state = self.state.lock().unwrap();
        let layer = match state.globals.get(data_layer_name) {
            Some(GlobalValue::DataLayer(layer)) => layer.clone(),
            _ => {
                return Err(global_scope_error(format!(
                    "No data layer named `{data_layer_name}`"
                )))
            }
        };
        state.globals.insert(
            function_name.to_string(),
            GlobalValue::Tracker(Tracker::new(layer)),
        );
        Ok(())
    }

    fn call_tracker(&self, function_name: &str, command: &GtagCommand) -> GtagResult<()> {
        let tracker = self
            .tracker(function_name)
            .ok_or_else(|| tracker_unbound(function_name))?;
        tracker.call(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ensure_data_layer_creates_once() {
        let page = MemoryPage::browser();
        page.ensure_data_layer("dataLayer").unwrap();
        let first = page.data_layer("dataLayer").unwrap();
        first.push(GtagCommand::config("AW-1"));

        page.ensure_data_layer("dataLayer").unwrap();
        let second = page.data_layer("dataLayer").unwrap();
        assert!(first.shares_queue_with(&second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn rebinding_replaces_previous_tracker() {
        let page = MemoryPage::browser();
        page.ensure_data_layer("first").unwrap();
        page.ensure_data_layer("second").unwrap();
        page.bind_tracker("gtag", "first").unwrap();
        page.bind_tracker("gtag", "second").unwrap();

        page.call_tracker("gtag", &GtagCommand::Raw(vec![json!("x")]))
            .unwrap();
        assert!(page.data_layer("first").unwrap().is_empty());
        assert_eq!(page.data_layer("second").unwrap().len(), 1);
    }

    #[test]
    fn calling_unbound_tracker_fails() {
        let page = MemoryPage::browser();
        let err = page
            .call_tracker("gtag", &GtagCommand::config("AW-1"))
            .unwrap_err();
        assert_eq!(err.code_str(), "gtag/tracker-unbound");
    }

    #[test]
    fn binding_requires_a_data_layer() {
        let page = MemoryPage::browser();
        let err = page.bind_tracker("gtag", "dataLayer").unwrap_err();
        assert_eq!(err.code_str(), "gtag/global-scope");
    }

    #[test]
    fn data_layer_slot_taken_by_tracker_is_reported() {
        let page = MemoryPage::browser();
        page.ensure_data_layer("dataLayer").unwrap();
        page.bind_tracker("gtag", "dataLayer").unwrap();
        let err = page.ensure_data_layer("gtag").unwrap_err();
        assert_eq!(err.code_str(), "gtag/global-scope");
    }

    #[test]
    fn clones_share_page_state() {
        let page = MemoryPage::browser();
        let view = page.clone();
        page.append_head_script(&ScriptTag::async_src("https://example.com/a.js"))
            .unwrap();
        assert_eq!(view.head_scripts().len(), 1);
        assert!(view.is_browser());
        assert!(!MemoryPage::server().is_browser());
    }
}
