//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for states and machines, the
//! [`transition_table!`](crate::transition_table) macro, and shorthand
//! constructors for the two state shapes that recur in almost every
//! machine. `MachineBuilder::build` performs the table validation that
//! makes dangling identifiers unrepresentable at run time.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;

use crate::core::{Event, Register, StateId};

/// Shorthand for a state that latches a register value and emits the same
/// event on every poll.
///
/// # Example
///
/// ```rust
/// use mealy::builder::emitting_state;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Signal {
///     Done,
/// }
///
/// let state = emitting_state::<bool, _, ()>(1u32, Signal::Done, true)
///     .transition(Signal::Done, true, 2u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.transitions().len(), 1);
/// ```
pub fn emitting_state<R, E, C>(
    id: impl Into<StateId>,
    event: E,
    register: R,
) -> StateBuilder<R, E, C>
where
    R: Register + 'static,
    E: Event + 'static,
    C: 'static,
{
    StateBuilder::new(id).on_poll(move |current: &mut R, _: &mut C| {
        *current = register.clone();
        Some(event.clone())
    })
}

/// Shorthand for a state whose function does nothing and never emits.
///
/// Typical for accepting states that only exist to park the cursor.
pub fn idle_state<R, E, C>(id: impl Into<StateId>) -> StateBuilder<R, E, C>
where
    R: Register + 'static,
    E: Event + 'static,
    C: 'static,
{
    StateBuilder::new(id).on_poll(|_: &mut R, _: &mut C| None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lifecycle;

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Done,
    }

    #[test]
    fn emitting_state_latches_and_emits() {
        let machine = MachineBuilder::new()
            .initial(1u32)
            .state(
                emitting_state::<bool, _, ()>(1u32, Signal::Done, true)
                    .transition(Signal::Done, true, 2u32),
            )
            .unwrap()
            .state(idle_state(2u32))
            .unwrap()
            .final_state(2u32)
            .build()
            .unwrap();

        let mut cursor = machine.initialize(());
        assert_eq!(cursor.poll(), Lifecycle::StateChanged);
        assert_eq!(*cursor.register(), true);
        assert_eq!(cursor.poll(), Lifecycle::Accepted);
    }

    #[test]
    fn idle_state_never_emits() {
        let machine = MachineBuilder::new()
            .initial(1u32)
            .state(idle_state::<bool, Signal, ()>(1u32))
            .unwrap()
            .build()
            .unwrap();

        let mut cursor = machine.initialize(());
        assert_eq!(cursor.poll(), Lifecycle::None);
        assert_eq!(cursor.poll(), Lifecycle::None);
    }
}
