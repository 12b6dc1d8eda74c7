//! The immutable machine definition.

use crate::core::{Event, Register, State, StateId};
use crate::engine::cursor::Cursor;
use std::collections::{BTreeMap, BTreeSet};

/// A complete, validated machine definition: the state table, the initial
/// state, and the final-state set.
///
/// Machines are immutable and owned by the host. They are constructed only
/// through [`MachineBuilder`](crate::builder::MachineBuilder), which
/// guarantees that the initial state, every final state, and every
/// transition target name a state actually present in the table. Any number
/// of cursors may run over one machine, one at a time each.
pub struct Machine<R, E, C> {
    pub(crate) states: BTreeMap<StateId, State<R, E, C>>,
    pub(crate) initial: StateId,
    pub(crate) finals: BTreeSet<StateId>,
}

impl<R: Register, E: Event, C> Machine<R, E, C> {
    /// The state a fresh cursor starts in.
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// The set of accepting states. May be empty, in which case a cursor
    /// never self-terminates via acceptance.
    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    /// Whether the table defines a state with this identifier.
    pub fn has_state(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Whether this identifier is a member of the final-state set.
    ///
    /// Membership is checked against the identifier alone, independent of
    /// any transition table.
    pub fn is_final(&self, id: StateId) -> bool {
        self.finals.contains(&id)
    }

    /// Look up a state definition.
    pub fn state(&self, id: StateId) -> Option<&State<R, E, C>> {
        self.states.get(&id)
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table is empty. Always false for a built machine.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    // Table membership of ids held by a cursor is guaranteed by builder
    // validation, so plain indexing cannot miss.
    pub(crate) fn slot(&self, id: StateId) -> &State<R, E, C> {
        &self.states[&id]
    }

    /// Create a run-time cursor over this machine.
    ///
    /// Sets the current state to the initial state, the output register to
    /// its neutral (`Default`) value, and the fault to none. If the initial
    /// state defines an enter hook it is invoked with `(None, initial)`.
    /// Initialize generates no lifecycle events and has no failure mode.
    ///
    /// `context` is caller-owned and opaque to the engine; it is handed
    /// `&mut` to every callback and can be reclaimed with
    /// [`Cursor::into_context`].
    pub fn initialize(&self, mut context: C) -> Cursor<'_, R, E, C> {
        let initial = self.slot(self.initial);
        if let Some(enter) = &initial.enter {
            enter(None, self.initial, &mut context);
        }
        tracing::debug!(initial = %self.initial, "cursor initialized");
        Cursor::new(self, self.initial, context)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{MachineBuilder, StateBuilder};
    use crate::core::StateId;

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Step,
    }

    #[derive(Clone, PartialEq, Debug, Default)]
    enum Latch {
        #[default]
        Neutral,
        Ready,
    }

    const FIRST: StateId = StateId(1);
    const SECOND: StateId = StateId(2);

    fn two_state_machine() -> crate::Machine<Latch, Signal, Vec<String>> {
        MachineBuilder::new()
            .initial(FIRST)
            .state(
                StateBuilder::new(FIRST)
                    .on_poll(|latch: &mut Latch, _: &mut Vec<String>| {
                        *latch = Latch::Ready;
                        Some(Signal::Step)
                    })
                    .on_enter(|previous, current, log: &mut Vec<String>| {
                        log.push(format!("enter {previous:?} -> {current}"));
                    })
                    .transition(Signal::Step, Latch::Ready, SECOND),
            )
            .unwrap()
            .state(StateBuilder::new(SECOND).on_poll(|_: &mut Latch, _: &mut Vec<String>| None))
            .unwrap()
            .final_state(SECOND)
            .build()
            .unwrap()
    }

    #[test]
    fn accessors_report_table_shape() {
        let machine = two_state_machine();
        assert_eq!(machine.initial_state(), FIRST);
        assert_eq!(machine.len(), 2);
        assert!(!machine.is_empty());
        assert!(machine.has_state(FIRST));
        assert!(machine.has_state(SECOND));
        assert!(!machine.has_state(StateId(9)));
    }

    #[test]
    fn final_membership_is_independent_of_transitions() {
        let machine = two_state_machine();
        assert!(machine.is_final(SECOND));
        assert!(!machine.is_final(FIRST));
        assert_eq!(machine.final_states().len(), 1);
    }

    #[test]
    fn state_lookup_returns_definitions() {
        let machine = two_state_machine();
        assert_eq!(machine.state(FIRST).map(|s| s.id()), Some(FIRST));
        assert!(machine.state(StateId(9)).is_none());
    }

    #[test]
    fn initialize_starts_at_initial_with_neutral_register() {
        let machine = two_state_machine();
        let cursor = machine.initialize(Vec::new());
        assert_eq!(cursor.current_state(), FIRST);
        assert_eq!(*cursor.register(), Latch::Neutral);
        assert!(!cursor.fault().is_set());
        assert!(cursor.history().is_empty());
    }

    #[test]
    fn initialize_fires_initial_enter_with_no_previous() {
        let machine = two_state_machine();
        let cursor = machine.initialize(Vec::new());
        assert_eq!(cursor.context().as_slice(), ["enter None -> 1"]);
    }

    #[test]
    fn initialize_without_enter_hook_touches_nothing() {
        let machine = MachineBuilder::new()
            .initial(FIRST)
            .state(
                StateBuilder::new(FIRST)
                    .on_poll(|_: &mut Latch, _: &mut Vec<String>| None::<Signal>),
            )
            .unwrap()
            .build()
            .unwrap();

        let cursor = machine.initialize(Vec::new());
        assert!(cursor.context().is_empty());
    }
}
