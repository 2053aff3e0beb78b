//! Storage backends and the serializing adapter.
//!
//! A [`StorageBackend`] is a synchronous key-value medium holding text. The
//! [`StorageAdapter`] layers JSON (de)serialization on top and broadcasts a
//! notification to write listeners after every successful write. On the web
//! the backend is LocalStorage; everywhere else an in-memory map stands in.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A synchronous key-value medium holding text values.
///
/// The medium itself is infallible: a key either holds text or it doesn't.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory backend for native targets and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// LocalStorage backend (WASM only).
///
/// Every write also dispatches a `storage` CustomEvent on the window,
/// carrying the written text as detail, so other same-page listeners can
/// observe persisted-state changes. A missing window or denied storage
/// access degrades to a medium that holds nothing.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    fn broadcast(value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&wasm_bindgen::JsValue::from_str(value));
        if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("storage", &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
            Self::broadcast(value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Serializing wrapper around a [`StorageBackend`].
pub struct StorageAdapter<B: StorageBackend> {
    backend: B,
    listeners: Vec<Rc<dyn Fn(&str, &str)>>,
}

impl<B: StorageBackend> StorageAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            listeners: Vec::new(),
        }
    }

    /// Serializes `value` and writes it under `item_id`, then notifies every
    /// write listener with the serialized text.
    ///
    /// Serialization failures propagate; nothing is written or broadcast in
    /// that case.
    pub fn set_item<S: Serialize>(&mut self, item_id: &str, value: &S) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            item_id: item_id.to_string(),
            source,
        })?;
        self.backend.set(item_id, &text);
        log::debug!("persisted `{item_id}` ({} bytes)", text.len());
        for listener in &self.listeners {
            listener(item_id, &text);
        }
        Ok(())
    }

    /// Reads and deserializes the entry under `item_id`.
    ///
    /// A missing or empty entry is `Ok(None)` — the absent sentinel, never
    /// an error. A present entry that fails to parse is an error.
    pub fn get_item<S: DeserializeOwned>(&self, item_id: &str) -> Result<Option<S>, StoreError> {
        match self.backend.get(item_id) {
            None => Ok(None),
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|source| {
                StoreError::Deserialize {
                    item_id: item_id.to_string(),
                    source,
                }
            }),
        }
    }

    /// Removes the entry under `item_id`. No notification is broadcast.
    pub fn remove_item(&mut self, item_id: &str) {
        self.backend.remove(item_id);
    }

    /// Registers a listener invoked with `(item_id, serialized_text)` after
    /// every successful write.
    pub fn on_write(&mut self, listener: impl Fn(&str, &str) + 'static) {
        self.listeners.push(Rc::new(listener));
    }
}
