//! Build errors for state and machine builders.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building states and machines.
///
/// Every malformed table is rejected here, before a cursor can exist, so
/// the engine never has to guard against dangling identifiers at run time.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(id) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State function not specified for state {0}. Call .on_poll(f)")]
    MissingFunction(StateId),

    #[error("Initial state {0} is not in the state table")]
    UnknownInitialState(StateId),

    #[error("Duplicate state identifier {0}")]
    DuplicateState(StateId),

    #[error("Transition in state {from} targets unknown state {target}")]
    DanglingTarget { from: StateId, target: StateId },

    #[error("Final state {0} is not in the state table")]
    UnknownFinalState(StateId),

    #[error("State {0} holds two transitions with the same event and register guard")]
    AmbiguousTransition(StateId),
}
