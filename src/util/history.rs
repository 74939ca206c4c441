//! Session-history backends behind the hash router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router only ever reads the current hash fragment and pushes new
//! entries. `MemoryHistory` models a browser session stack for tests;
//! `BrowserHistory` drives `window.history` and `window.location` in the
//! `csr` build.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Minimal history surface used by the view router.
pub trait HistoryBackend {
    /// Current hash fragment without the leading `#`; empty for the root.
    fn fragment(&self) -> String;

    /// Push a new entry: `Some(id)` targets `#id`, `None` targets `/`.
    fn push_fragment(&mut self, fragment: Option<&str>);
}

/// Strip a single leading `#` from a raw `location.hash` value.
#[must_use]
pub fn strip_hash(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

/// In-memory session history with back/forward traversal.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// A fresh session sitting at the root path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// A fresh session whose initial URL carries `raw` as its hash.
    #[must_use]
    pub fn with_fragment(raw: &str) -> Self {
        Self { entries: vec![strip_hash(raw).to_owned()], cursor: 0 }
    }

    /// Step back one entry. Returns `false` at the start of the session.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Total entries in the session, including ones ahead of the cursor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBackend for MemoryHistory {
    fn fragment(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }

    fn push_fragment(&mut self, fragment: Option<&str>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.unwrap_or_default().to_owned());
        self.cursor = self.entries.len() - 1;
    }
}

/// `window.history` backed implementation for the browser build.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

#[cfg(feature = "csr")]
impl HistoryBackend for BrowserHistory {
    fn fragment(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().hash() {
            Ok(raw) => strip_hash(&raw).to_owned(),
            Err(e) => {
                log::warn!("reading location hash failed: {e:?}");
                String::new()
            }
        }
    }

    fn push_fragment(&mut self, fragment: Option<&str>) {
        let url = match fragment {
            Some(id) => format!("#{id}"),
            None => "/".to_owned(),
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)));
        if let Err(e) = pushed {
            log::warn!("history push to {url} failed: {e:?}");
        }
    }
}

/// History backend for the current build: the browser's session history
/// under `csr`, a throwaway in-memory session otherwise.
#[must_use]
pub fn session() -> impl HistoryBackend {
    #[cfg(feature = "csr")]
    {
        BrowserHistory
    }
    #[cfg(not(feature = "csr"))]
    {
        MemoryHistory::new()
    }
}
