//! Mealy: a table-driven state machine engine advanced by synchronous polling.
//!
//! A host describes its machine as data (states, transition rules, and
//! callback functions) and the engine interprets that table one tick at a
//! time. Each call to [`Cursor::poll`] runs the active state's function,
//! checks the final-state set, resolves at most one transition, and reports
//! a [`Lifecycle`] event. There is no scheduler and no background activity:
//! advancement happens only when the host polls.
//!
//! # Core Concepts
//!
//! - **Machine**: the immutable, validated state table plus initial state
//!   and final-state set
//! - **Cursor**: one synchronous run over a machine, holding the current
//!   state, output register, fault flag, and caller context
//! - **Output register**: a single value threaded across polls, written by
//!   state functions and compared by transition rules (the Mealy output,
//!   distinct from the state identifier itself)
//! - **Last match wins**: transition resolution scans the whole table and
//!   lets the last matching rule override earlier ones
//!
//! # Example
//!
//! ```rust
//! use mealy::{Lifecycle, MachineBuilder, StateBuilder, StateId};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Signal {
//!     Finish,
//! }
//!
//! #[derive(Clone, PartialEq, Debug, Default)]
//! enum Latch {
//!     #[default]
//!     Neutral,
//!     Ok,
//! }
//!
//! const INITIAL: StateId = StateId(1);
//! const FINAL: StateId = StateId(2);
//!
//! # fn main() -> Result<(), mealy::BuildError> {
//! let machine = MachineBuilder::new()
//!     .initial(INITIAL)
//!     .state(
//!         StateBuilder::new(INITIAL)
//!             .on_poll(|latch: &mut Latch, _: &mut ()| {
//!                 *latch = Latch::Ok;
//!                 Some(Signal::Finish)
//!             })
//!             .transition(Signal::Finish, Latch::Ok, FINAL),
//!     )?
//!     .state(StateBuilder::new(FINAL).on_poll(|_: &mut Latch, _: &mut ()| None))?
//!     .final_state(FINAL)
//!     .build()?;
//!
//! let mut cursor = machine.initialize(());
//! assert_eq!(cursor.poll(), Lifecycle::StateChanged);
//! assert_eq!(cursor.poll(), Lifecycle::Accepted);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use checkpoint::{CheckpointError, Snapshot, CHECKPOINT_VERSION};
pub use engine::{Cursor, Machine};
pub use self::core::{
    ChangeHook, Event, Fault, History, Lifecycle, Register, State, StateFn, StateId, Transition,
    TransitionRecord,
};
