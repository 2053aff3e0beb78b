//! The `save` reducer wrapper.
//!
//! Wrapping a reducer is what ties a slice of state to a storage key: the
//! wrapper intercepts the hydrate command to load from storage, and mirrors
//! the post-reduce state back to storage whenever the envelope says so.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::action::{Action, Command, Envelope};
use crate::error::StoreError;
use crate::registry::Registry;
use crate::storage::StorageBackend;

/// Wraps a pure reducer so its state is mirrored to storage under `item_id`.
///
/// The inner reducer has signature `(Option<S>, Option<&A>) -> S`: `None`
/// state asks for the default initial state, `None` action is the neutral
/// no-op action. The returned reducer drives a [`crate::store::BasicStore`];
/// it owns a clone of the registry handle rather than borrowing `registry`,
/// so it is free to outlive the wrap call.
///
/// `item_id` is registered at wrap time; reusing an id logs a warning and
/// proceeds, after which both wraps share one storage key.
///
/// On hydrate, a loaded snapshot is passed through the inner reducer with
/// the neutral action so it can be normalized; the raw stored value is never
/// returned as-is, and whatever else the envelope carried is discarded. With
/// no snapshot present, the reducer's own default is used. On any other
/// command the reducer runs normally and the result is written to storage
/// when the envelope's persist flag is set; write failures propagate rather
/// than dropping data silently.
pub fn save<B, S, A, R, I>(
    registry: &Registry<B>,
    item_id: I,
    reducer: R,
) -> impl Fn(Option<S>, &Envelope<A>) -> Result<S, StoreError> + use<B, S, A, R, I>
where
    B: StorageBackend + 'static,
    S: Serialize + DeserializeOwned + 'static,
    A: Action + 'static,
    R: Fn(Option<S>, Option<&A>) -> S + 'static,
    I: Into<String>,
{
    let item_id = item_id.into();
    registry.register(&item_id);
    let registry = registry.clone();

    move |state, envelope| match &envelope.command {
        Command::Hydrate => {
            log::debug!("hydrating `{item_id}`");
            match registry.get_item::<S>(&item_id)? {
                Some(loaded) => Ok(reducer(Some(loaded), None)),
                None => Ok(reducer(None, None)),
            }
        }
        command => {
            let result = reducer(state, command.app());
            if envelope.should_persist {
                registry.set_item(&item_id, &result)?;
            }
            Ok(result)
        }
    }
}
