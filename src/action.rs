//! Actions, reserved commands, and the dispatch envelope.
//!
//! The persist flag travels next to the caller's action in an [`Envelope`]
//! rather than being injected into it, so caller-supplied actions are never
//! mutated on their way through the façade.

use crate::kinds;

/// A dispatchable action with a string discriminant.
///
/// The discriminant is what blacklist matching runs against.
pub trait Action {
    fn kind(&self) -> &str;
}

impl Action for &'static str {
    fn kind(&self) -> &str {
        self
    }
}

impl Action for String {
    fn kind(&self) -> &str {
        self
    }
}

/// What a dispatch asks the wrapped reducer to do.
///
/// `Hydrate`, `Persist` and `Init` are the reserved commands; `App` carries
/// an ordinary application action untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<A> {
    /// Replace state with the persisted snapshot (or the reducer default)
    Hydrate,
    /// Run the reducer on the neutral action so the result can be persisted
    Persist,
    /// Store bootstrap; produces the reducer's default initial state
    Init,
    /// An application action
    App(A),
}

impl<A: Action> Command<A> {
    /// Discriminant of this command, reserved or application-supplied.
    pub fn kind(&self) -> &str {
        match self {
            Command::Hydrate => kinds::HYDRATE,
            Command::Persist => kinds::PERSIST,
            Command::Init => kinds::INIT,
            Command::App(action) => action.kind(),
        }
    }

    /// The application action, if this is one.
    ///
    /// Reserved commands reduce with the neutral (`None`) action.
    pub fn app(&self) -> Option<&A> {
        match self {
            Command::App(action) => Some(action),
            _ => None,
        }
    }
}

/// A command plus the persist flag stamped by the façade.
///
/// The flag is stamped exactly once, before the envelope enters the store;
/// downstream code only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<A> {
    pub command: Command<A>,
    pub should_persist: bool,
}

impl<A> Envelope<A> {
    pub fn new(command: Command<A>, should_persist: bool) -> Self {
        Self {
            command,
            should_persist,
        }
    }

    /// The bootstrap envelope a store dispatches to itself at construction.
    /// Never persist-worthy.
    pub fn init() -> Self {
        Self {
            command: Command::Init,
            should_persist: false,
        }
    }
}
