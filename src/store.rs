//! Reduce-over-actions state container.
//!
//! The façade only needs a dispatch/state/subscribe seam, expressed by the
//! [`Store`] trait. [`BasicStore`] is the built-in implementation; anything
//! that reduces envelopes over state can stand in for it.

use crate::action::{Action, Envelope};
use crate::error::StoreError;

/// Identifies one subscription for later removal.
pub type SubscriberId = u64;

/// The store seam the façade wraps.
pub trait Store<S, A: Action> {
    /// Reduces the envelope into the current state.
    fn dispatch(&mut self, envelope: Envelope<A>) -> Result<(), StoreError>;

    /// Current state.
    fn state(&self) -> &S;

    /// Registers a listener invoked with the new state after every
    /// successful dispatch.
    fn subscribe(&mut self, listener: Box<dyn Fn(&S)>) -> SubscriberId;

    fn unsubscribe(&mut self, id: SubscriberId);
}

/// Minimal synchronous store driven by a wrapped reducer.
pub struct BasicStore<S, A> {
    reducer: Box<dyn Fn(Option<S>, &Envelope<A>) -> Result<S, StoreError>>,
    state: S,
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&S)>)>,
    next_subscriber: SubscriberId,
}

impl<S, A> BasicStore<S, A>
where
    S: Clone,
    A: Action,
{
    /// Builds the store and runs the reducer once with the bootstrap
    /// envelope, so `state()` starts at the reducer's default initial state.
    pub fn new(
        reducer: impl Fn(Option<S>, &Envelope<A>) -> Result<S, StoreError> + 'static,
    ) -> Result<Self, StoreError> {
        let state = reducer(None, &Envelope::init())?;
        Ok(Self {
            reducer: Box::new(reducer),
            state,
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }
}

impl<S, A> Store<S, A> for BasicStore<S, A>
where
    S: Clone,
    A: Action,
{
    fn dispatch(&mut self, envelope: Envelope<A>) -> Result<(), StoreError> {
        // State is committed only when the reducer run succeeds.
        let next = (self.reducer)(Some(self.state.clone()), &envelope)?;
        self.state = next;
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
        Ok(())
    }

    fn state(&self) -> &S {
        &self.state
    }

    fn subscribe(&mut self, listener: Box<dyn Fn(&S)>) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Command;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_reducer(
        state: Option<u32>,
        envelope: &Envelope<&'static str>,
    ) -> Result<u32, StoreError> {
        let state = state.unwrap_or(0);
        Ok(match envelope.command.app() {
            Some(&"BUMP") => state + 1,
            _ => state,
        })
    }

    fn failing_reducer(
        _state: Option<u32>,
        envelope: &Envelope<&'static str>,
    ) -> Result<u32, StoreError> {
        if envelope.command.app() == Some(&"EXPLODE") {
            return Err(StoreError::Deserialize {
                item_id: "boom".to_string(),
                source: serde_json::from_str::<u32>("x").unwrap_err(),
            });
        }
        Ok(5)
    }

    #[test]
    fn test_new_store_starts_at_reducer_default() {
        let store = BasicStore::new(counting_reducer).unwrap();
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_dispatch_reduces_state() {
        let mut store = BasicStore::new(counting_reducer).unwrap();
        store
            .dispatch(Envelope::new(Command::App("BUMP"), false))
            .unwrap();
        store
            .dispatch(Envelope::new(Command::App("BUMP"), false))
            .unwrap();
        assert_eq!(*store.state(), 2);
    }

    #[test]
    fn test_subscribers_observe_each_dispatch() {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = BasicStore::new(counting_reducer).unwrap();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(Box::new(move |state| sink.borrow_mut().push(*state)));

        store
            .dispatch(Envelope::new(Command::App("BUMP"), false))
            .unwrap();
        store
            .dispatch(Envelope::new(Command::App("OTHER"), false))
            .unwrap();
        assert_eq!(*seen.borrow(), vec![1, 1]);

        store.unsubscribe(id);
        store
            .dispatch(Envelope::new(Command::App("BUMP"), false))
            .unwrap();
        assert_eq!(*seen.borrow(), vec![1, 1]);
    }

    #[test]
    fn test_failed_dispatch_leaves_state_unchanged() {
        let mut store = BasicStore::new(failing_reducer).unwrap();
        assert_eq!(*store.state(), 5);
        let result = store.dispatch(Envelope::new(Command::App("EXPLODE"), false));
        assert!(result.is_err());
        assert_eq!(*store.state(), 5);
    }
}
