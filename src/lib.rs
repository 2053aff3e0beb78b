//! Write-through persistence for reducer-driven stores.
//!
//! Core modules:
//! - `action`: actions, reserved commands, and the dispatch envelope
//! - `storage`: key-value backends and the serializing adapter
//! - `registry`: shared context (item ids, pause flag, storage adapter)
//! - `reducer`: the [`save`] reducer wrapper
//! - `store`: the reduce-over-actions state container
//! - `facade`: the [`NonVolatileStore`] façade
//!
//! Flow: wrap a reducer with [`save`], drive a [`BasicStore`] with the
//! wrapped reducer, then wrap the store in a [`NonVolatileStore`]. The
//! façade hydrates from storage at construction (unless configured not to)
//! and stamps every outgoing action with the persist flag; the wrapped
//! reducer mirrors persist-worthy results back to storage.

pub mod action;
pub mod config;
pub mod error;
pub mod facade;
pub mod reducer;
pub mod registry;
pub mod storage;
pub mod store;

pub use action::{Action, Command, Envelope};
pub use config::Config;
pub use error::StoreError;
pub use facade::NonVolatileStore;
pub use reducer::save;
pub use registry::Registry;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageBackend;
pub use storage::{MemoryBackend, StorageAdapter, StorageBackend};
pub use store::{BasicStore, Store, SubscriberId};

/// Reserved action discriminants
pub mod kinds {
    /// Hydrate command: load persisted state instead of reducing
    pub const HYDRATE: &str = "@@nonvolatile/HYDRATE";
    /// Force-persist command dispatched by `persist()`
    pub const PERSIST: &str = "@@nonvolatile/PERSIST";
    /// Store bootstrap dispatch; never passes through the façade
    pub const INIT: &str = "@@nonvolatile/INIT";
}
