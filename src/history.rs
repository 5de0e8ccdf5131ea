//! Address Bar History
//!
//! Reads the current URL and writes history entries for page changes.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::route::{Location, Page};

/// Browser session history as seen by the router
pub trait History {
    fn location(&self) -> Location;
    /// Add an entry for the page's canonical path
    fn push(&mut self, page: Page);
    /// Overwrite the current entry with the page's canonical path
    fn replace(&mut self, page: Page);
    fn set_hash(&mut self, hash: &str);
}

/// State object attached to each entry: `{ page: "staffDashboard" }`
#[derive(Serialize)]
struct EntryState {
    page: Page,
}

/// `window.history` and `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn write(page: Page, push: bool) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            log::error!("window.history is unavailable");
            return;
        };
        let state = serde_wasm_bindgen::to_value(&EntryState { page }).unwrap_or(JsValue::NULL);
        let result = if push {
            history.push_state_with_url(&state, "", Some(page.path()))
        } else {
            history.replace_state_with_url(&state, "", Some(page.path()))
        };
        if let Err(err) = result {
            log::error!("failed to update history for {}: {:?}", page.name(), err);
        }
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Location {
        let Some(window) = web_sys::window() else {
            return Location::default();
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        Location::new(path, &hash)
    }

    fn push(&mut self, page: Page) {
        Self::write(page, true);
    }

    fn replace(&mut self, page: Page) {
        Self::write(page, false);
    }

    fn set_hash(&mut self, hash: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_hash(hash) {
                log::error!("failed to set location hash: {:?}", err);
            }
        }
    }
}

/// Entry list with a cursor, for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

#[cfg(test)]
impl MemoryHistory {
    pub fn new(path: &str, hash: &str) -> Self {
        Self {
            entries: vec![Location::new(path, hash)],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Move the cursor like the back button; returns false at the start
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.current().clone()
    }

    fn push(&mut self, page: Page) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::new(page.path(), ""));
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, page: Page) {
        self.entries[self.index] = Location::new(page.path(), "");
    }

    fn set_hash(&mut self, hash: &str) {
        let path = self.current().path.clone();
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::new(path, hash));
        self.index = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new("/", "");
        history.push(Page::Register);
        history.push(Page::StaffRegister);
        assert!(history.back());
        history.push(Page::Dashboard);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().path, "/dashboard");
        assert!(!history.forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new("/admin-dashboard", "");
        history.replace(Page::Home);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &Location::new("/", ""));
    }

    #[test]
    fn test_entry_state_uses_page_names() {
        for page in Page::ALL {
            let state = serde_json::to_value(EntryState { page }).unwrap();
            assert_eq!(state["page"], page.name());
        }
    }
}
