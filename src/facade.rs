//! The non-volatile store façade.
//!
//! Wraps a store so every outgoing action is stamped with the persist flag,
//! and layers pause/resume/persist/purge on top of the store's dispatch.

use std::marker::PhantomData;

use crate::action::{Action, Command, Envelope};
use crate::config::Config;
use crate::error::StoreError;
use crate::registry::Registry;
use crate::storage::StorageBackend;
use crate::store::{Store, SubscriberId};

/// A store whose state survives restarts.
///
/// Construction hydrates immediately (unless configured for manual
/// hydration), so the first `state()` call already reflects persisted data.
/// Thereafter every dispatch is stamped persist-worthy unless persistence is
/// paused, the action's kind is blacklisted, or the façade runs in manual
/// persistence mode.
pub struct NonVolatileStore<St, S, A, B>
where
    St: Store<S, A>,
    A: Action,
    B: StorageBackend,
{
    store: St,
    registry: Registry<B>,
    config: Config,
    _marker: PhantomData<(S, A)>,
}

impl<St, S, A, B> NonVolatileStore<St, S, A, B>
where
    St: Store<S, A>,
    A: Action,
    B: StorageBackend,
{
    /// Wraps `store`, hydrating it from storage unless
    /// `config.manual_hydration` is set.
    pub fn new(store: St, registry: Registry<B>, config: Config) -> Result<Self, StoreError> {
        let mut facade = Self {
            store,
            registry,
            config,
            _marker: PhantomData,
        };
        if !facade.config.manual_hydration {
            facade.hydrate()?;
        }
        Ok(facade)
    }

    /// Stamps the persist flag and forwards to the wrapped store.
    pub fn dispatch(&mut self, action: A) -> Result<(), StoreError> {
        self.send(Command::App(action))
    }

    /// Reloads persisted state into the store. Callable at any time, not
    /// just at construction.
    pub fn hydrate(&mut self) -> Result<(), StoreError> {
        self.send(Command::Hydrate)
    }

    /// Asks every wrapped reducer driven by this store to write its current
    /// state. Subject to the same pause/blacklist/manual gating as any other
    /// dispatch, so persisting while paused is a storage no-op.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.send(Command::Persist)
    }

    /// Stops stamping actions persist-worthy. Takes effect on the next
    /// dispatch; already-written snapshots stay put.
    pub fn pause(&self) {
        self.registry.pause();
    }

    pub fn resume(&self) {
        self.registry.resume();
    }

    /// Removes the storage entry of every item id registered with this
    /// façade's registry. Goes to the medium directly, bypassing dispatch.
    pub fn purge(&self) {
        self.registry.purge();
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&S)>) -> SubscriberId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.store.unsubscribe(id);
    }

    /// The registry this façade stamps and purges through.
    pub fn registry(&self) -> &Registry<B> {
        &self.registry
    }

    fn send(&mut self, command: Command<A>) -> Result<(), StoreError> {
        let should_persist = !self.registry.is_paused()
            && !self.config.is_blacklisted(command.kind())
            && !self.config.manual_persistence;
        self.store.dispatch(Envelope::new(command, should_persist))
    }
}
