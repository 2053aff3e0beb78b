//! Shared persistence context.
//!
//! The registry owns what the original design kept as process-wide globals:
//! the set of registered item identifiers, the pause flag, and the storage
//! adapter. Each façade holds a handle to one registry, so independent
//! registries never cross-contaminate. Handles are cheap clones of one
//! shared cell; everything here is single-threaded and synchronous.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::storage::{StorageAdapter, StorageBackend};

/// Handle to the shared persistence context.
pub struct Registry<B: StorageBackend> {
    inner: Rc<RefCell<RegistryInner<B>>>,
}

struct RegistryInner<B: StorageBackend> {
    adapter: StorageAdapter<B>,
    item_ids: HashSet<String>,
    paused: bool,
}

impl<B: StorageBackend> Clone for Registry<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<B: StorageBackend> Registry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                adapter: StorageAdapter::new(backend),
                item_ids: HashSet::new(),
                paused: false,
            })),
        }
    }

    /// Registers an item identifier, claiming its storage key.
    ///
    /// Duplicate registration is warned about but never prevented: both
    /// registrations proceed and share one storage key, silently overwriting
    /// each other on persist. Returns whether the id was newly registered.
    pub fn register(&self, item_id: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.item_ids.contains(item_id) {
            log::warn!("Reusing item ID {item_id}");
            return false;
        }
        inner.item_ids.insert(item_id.to_string());
        true
    }

    pub fn is_registered(&self, item_id: &str) -> bool {
        self.inner.borrow().item_ids.contains(item_id)
    }

    /// Stops actions from being stamped persist-worthy. Takes effect on the
    /// next dispatch, not retroactively.
    pub fn pause(&self) {
        self.inner.borrow_mut().paused = true;
    }

    pub fn resume(&self) {
        self.inner.borrow_mut().paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.inner.borrow().paused
    }

    /// Serializes and writes one snapshot. See [`StorageAdapter::set_item`].
    pub fn set_item<S: Serialize>(&self, item_id: &str, value: &S) -> Result<(), StoreError> {
        self.inner.borrow_mut().adapter.set_item(item_id, value)
    }

    /// Reads one snapshot. See [`StorageAdapter::get_item`].
    pub fn get_item<S: DeserializeOwned>(&self, item_id: &str) -> Result<Option<S>, StoreError> {
        self.inner.borrow().adapter.get_item(item_id)
    }

    pub fn remove_item(&self, item_id: &str) {
        self.inner.borrow_mut().adapter.remove_item(item_id);
    }

    /// Registers a write listener on the adapter. Listeners run while the
    /// registry is borrowed and must not call back into it.
    pub fn on_write(&self, listener: impl Fn(&str, &str) + 'static) {
        self.inner.borrow_mut().adapter.on_write(listener);
    }

    /// Removes the storage entry of every registered item identifier,
    /// bypassing dispatch entirely.
    pub fn purge(&self) {
        let mut inner = self.inner.borrow_mut();
        let ids: Vec<String> = inner.item_ids.iter().cloned().collect();
        for id in &ids {
            inner.adapter.remove_item(id);
        }
        log::debug!("purged {} persisted item(s)", ids.len());
    }
}
