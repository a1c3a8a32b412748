//! Local persistence for the two user settings (theme and language).
//!
//! Values are stored as raw strings with no encoding, so a page that was
//! served by the previous script-based site keeps its saved choices.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::SiteError;

/// Read/write capability injected into [`crate::App`].
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory storage. Clones share the same map, so a clone handed to a
/// second `App` behaves like the same browser profile after a reload.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. When the browser denies access (private mode,
/// sandboxed iframe) reads yield nothing and writes report an error.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[storage] localStorage unavailable; settings will not persist");
        }
        Self { inner }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        let storage = self.inner.as_ref().ok_or_else(|| SiteError::Storage {
            key: key.to_string(),
            reason: "localStorage unavailable".into(),
        })?;
        storage.set_item(key, value).map_err(|err| SiteError::Storage {
            key: key.to_string(),
            reason: format!("{err:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let reloaded = storage.clone();
        storage.write("wocon-language", "zh").unwrap();
        assert_eq!(reloaded.read("wocon-language").as_deref(), Some("zh"));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn missing_key_reads_none() {
        let storage = MemoryStorage::with_entry("wocon-theme", "dark");
        assert_eq!(storage.read("wocon-language"), None);
        assert!(!storage.is_empty());
    }
}
