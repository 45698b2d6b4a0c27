//! # Browser local storage
//!
//! [`LocalStorage`] is the [`RecordStorage`] implementation used on the **web
//! platform**. Records go straight into `window.localStorage` through
//! [`web_sys::Storage`], so a write is durable as soon as `setItem` returns.
//!
//! ## Error handling
//!
//! A missing `window`, disabled storage (private browsing, sandboxed iframes)
//! and `setItem` exceptions such as `QuotaExceededError` all map to
//! [`StoreError::Storage`]. The store reports these to the caller and keeps the
//! in-memory document as the session's source of truth.

use wasm_bindgen::JsValue;

use crate::error::{Result, StoreError};
use crate::storage::RecordStorage;

/// `window.localStorage`-backed RecordStorage for the web platform.
///
/// Zero-size and `Clone`: the storage object is looked up on every call, which
/// is cheap and avoids holding a non-`Send` JS handle.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("local storage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(format!("{err:?}"))
}

impl RecordStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
