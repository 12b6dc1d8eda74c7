//! State records and the identifier/callback vocabulary of a machine.
//!
//! A machine is a table of immutable [`State`] records. Each record carries
//! the callback that performs one unit of work per poll, optional enter/exit
//! hooks, and the ordered transition rules scoped to that state.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;

/// Opaque identifier naming a state within one machine.
///
/// Identifiers need not be contiguous. The engine never interprets the
/// value; it only compares and orders identifiers. "No previous state"
/// (the enter hook of the initial state) is expressed as `Option<StateId>`
/// rather than a reserved sentinel value, so any `u32` is a legal
/// identifier.
///
/// # Example
///
/// ```rust
/// use mealy::StateId;
///
/// const IDLE: StateId = StateId(1);
/// const BUSY: StateId = StateId(2);
///
/// assert_ne!(IDLE, BUSY);
/// assert_eq!(StateId::from(1), IDLE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl From<u32> for StateId {
    fn from(raw: u32) -> Self {
        StateId(raw)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker trait for output-register ("flip-flop") types.
///
/// The register is a single mutable value threaded across polls: state
/// functions may overwrite it, and transition rules compare against it.
/// Its type is fixed once per machine instance via this parameter, and the
/// `Default` value is the neutral value a fresh cursor starts from.
///
/// Blanket-implemented for every suitable type; hosts never implement it
/// by hand.
pub trait Register: Clone + PartialEq + Debug + Default + Send + Sync {}

impl<T> Register for T where T: Clone + PartialEq + Debug + Default + Send + Sync {}

/// Marker trait for domain event codes returned by state functions.
///
/// Event codes are defined by the host domain and are distinct from the
/// [`Lifecycle`](crate::Lifecycle) values the engine itself reports.
/// "No event" is expressed as `Option::None`, not as a reserved code.
///
/// Blanket-implemented for every suitable type.
pub trait Event: Clone + PartialEq + Debug + Send + Sync {}

impl<T> Event for T where T: Clone + PartialEq + Debug + Send + Sync {}

/// The work function of a state.
///
/// Invoked once per poll while its state is active. Receives the output
/// register and the caller context, both mutably; returns `Some(event)` to
/// drive transition resolution or `None` for a quiet tick.
pub type StateFn<R, E, C> = Box<dyn Fn(&mut R, &mut C) -> Option<E> + Send + Sync>;

/// Hook invoked when the cursor moves into or out of a state.
///
/// Receives `(previous, current)` identifiers plus the caller context.
/// `previous` is `None` only when the initial state is entered during
/// [`Machine::initialize`](crate::Machine::initialize); exit hooks always
/// receive `Some`.
pub type ChangeHook<C> = Box<dyn Fn(Option<StateId>, StateId, &mut C) + Send + Sync>;

/// One immutable machine state: identifier, callbacks, and the ordered
/// transition rules scoped to it.
///
/// States are constructed once through
/// [`StateBuilder`](crate::builder::StateBuilder) before the machine runs
/// and are never mutated afterwards.
pub struct State<R, E, C> {
    pub(crate) id: StateId,
    pub(crate) name: Option<String>,
    pub(crate) function: StateFn<R, E, C>,
    pub(crate) enter: Option<ChangeHook<C>>,
    pub(crate) exit: Option<ChangeHook<C>>,
    pub(crate) transitions: Vec<Transition<E, R>>,
}

impl<R, E, C> State<R, E, C> {
    /// This state's identifier.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Optional human label for diagnostics.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The transition rules scoped to this state, in table order.
    pub fn transitions(&self) -> &[Transition<E, R>] {
        &self.transitions
    }
}

impl<R, E, C> Debug for State<R, E, C>
where
    E: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("enter", &self.enter.is_some())
            .field("exit", &self.exit.is_some())
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
