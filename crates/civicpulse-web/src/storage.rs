//! `localStorage`-backed selection store

use civicpulse_core::storage::SelectionStore;
use civicpulse_core::{Error, Result};
use wasm_bindgen::JsValue;

/// Selection store backed by the window's `localStorage`
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the current window's `localStorage`
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window or when storage access is
    /// denied (private browsing, disabled cookies).
    pub fn local() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Storage {
            message: "window not available".to_string(),
        })?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Storage {
                message: "localStorage not available".to_string(),
            })?;

        Ok(Self { storage })
    }
}

impl SelectionStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Storage {
        message: value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    }
}
