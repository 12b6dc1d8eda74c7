//! Core data model of the engine.
//!
//! This module holds the declarative vocabulary a host uses to describe a
//! machine, plus the small set of values the engine reports back:
//! - State records, identifiers, and callback types
//! - Transition rules
//! - The fault taxonomy and lifecycle events
//! - Transition history tracking
//!
//! Everything here is plain data; the interpretation lives in
//! [`engine`](crate::engine).

mod fault;
mod history;
mod lifecycle;
mod state;
mod transition;

pub use fault::Fault;
pub use history::{History, TransitionRecord};
pub use lifecycle::Lifecycle;
pub use state::{ChangeHook, Event, Register, State, StateFn, StateId};
pub use transition::Transition;
