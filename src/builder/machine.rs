//! Builder for constructing validated machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Event, Register, State, StateId};
use crate::engine::Machine;
use std::collections::{BTreeMap, BTreeSet};

/// Builder for a [`Machine`] with a fluent API.
///
/// `build` validates the whole table before the machine can run: the
/// initial state must be set and present, identifiers must be unique, and
/// every transition target and final-state identifier must name a state in
/// the table. This is what lets the engine treat "current state not in
/// table" as unrepresentable instead of a runtime fault.
pub struct MachineBuilder<R, E, C> {
    initial: Option<StateId>,
    states: Vec<State<R, E, C>>,
    finals: BTreeSet<StateId>,
    deny_ambiguity: bool,
}

impl<R: Register, E: Event, C> MachineBuilder<R, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            finals: BTreeSet::new(),
            deny_ambiguity: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<StateId>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the state builder fails validation.
    pub fn state(mut self, builder: StateBuilder<R, E, C>) -> Result<Self, BuildError> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: State<R, E, C>) -> Self {
        self.states.push(state);
        self
    }

    /// Mark one state as accepting.
    pub fn final_state(mut self, id: impl Into<StateId>) -> Self {
        self.finals.insert(id.into());
        self
    }

    /// Mark several states as accepting.
    pub fn final_states<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.finals.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Reject tables in which a state holds two transitions with an
    /// identical (event, register) guard.
    ///
    /// By default such tables are legal and resolution lets the last
    /// matching rule win; this strict mode is for hosts that consider a
    /// duplicated guard a table-authoring mistake rather than a deliberate
    /// override.
    pub fn deny_ambiguity(mut self) -> Self {
        self.deny_ambiguity = true;
        self
    }

    /// Build and validate the machine.
    pub fn build(self) -> Result<Machine<R, E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut table = BTreeMap::new();
        for state in self.states {
            let id = state.id();
            if table.insert(id, state).is_some() {
                return Err(BuildError::DuplicateState(id));
            }
        }

        if !table.contains_key(&initial) {
            return Err(BuildError::UnknownInitialState(initial));
        }

        for id in &self.finals {
            if !table.contains_key(id) {
                return Err(BuildError::UnknownFinalState(*id));
            }
        }

        for (id, state) in &table {
            for rule in state.transitions() {
                if !table.contains_key(&rule.target) {
                    return Err(BuildError::DanglingTarget {
                        from: *id,
                        target: rule.target,
                    });
                }
            }

            if self.deny_ambiguity {
                let rules = state.transitions();
                for (index, rule) in rules.iter().enumerate() {
                    let duplicated = rules[index + 1..]
                        .iter()
                        .any(|other| other.event == rule.event && other.register == rule.register);
                    if duplicated {
                        return Err(BuildError::AmbiguousTransition(*id));
                    }
                }
            }
        }

        Ok(Machine {
            states: table,
            initial,
            finals: self.finals,
        })
    }
}

impl<R: Register, E: Event, C> Default for MachineBuilder<R, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Go,
    }

    #[derive(Clone, PartialEq, Debug, Default)]
    enum Latch {
        #[default]
        Neutral,
        Hot,
    }

    fn idle(id: u32) -> StateBuilder<Latch, Signal, ()> {
        StateBuilder::new(id).on_poll(|_: &mut Latch, _: &mut ()| None)
    }

    #[test]
    fn build_requires_initial_state() {
        let result = MachineBuilder::<Latch, Signal, ()>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn build_requires_states() {
        let result = MachineBuilder::<Latch, Signal, ()>::new()
            .initial(1u32)
            .build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn build_rejects_unknown_initial_state() {
        let result = MachineBuilder::new().initial(5u32).state(idle(1)).unwrap().build();
        assert!(matches!(
            result,
            Err(BuildError::UnknownInitialState(id)) if id == StateId(5)
        ));
    }

    #[test]
    fn build_rejects_duplicate_identifiers() {
        let result = MachineBuilder::new()
            .initial(1u32)
            .state(idle(1))
            .unwrap()
            .state(idle(1))
            .unwrap()
            .build();
        assert!(matches!(
            result,
            Err(BuildError::DuplicateState(id)) if id == StateId(1)
        ));
    }

    #[test]
    fn build_rejects_dangling_transition_target() {
        let result = MachineBuilder::new()
            .initial(1u32)
            .state(idle(1).transition(Signal::Go, Latch::Hot, 9u32))
            .unwrap()
            .build();
        assert!(matches!(
            result,
            Err(BuildError::DanglingTarget { from, target })
                if from == StateId(1) && target == StateId(9)
        ));
    }

    #[test]
    fn build_rejects_unknown_final_state() {
        let result = MachineBuilder::new()
            .initial(1u32)
            .state(idle(1))
            .unwrap()
            .final_state(7u32)
            .build();
        assert!(matches!(
            result,
            Err(BuildError::UnknownFinalState(id)) if id == StateId(7)
        ));
    }

    #[test]
    fn duplicated_guards_are_legal_by_default() {
        let machine = MachineBuilder::new()
            .initial(1u32)
            .state(
                idle(1)
                    .transition(Signal::Go, Latch::Hot, 2u32)
                    .transition(Signal::Go, Latch::Hot, 1u32),
            )
            .unwrap()
            .state(idle(2))
            .unwrap()
            .build();
        assert!(machine.is_ok());
    }

    #[test]
    fn deny_ambiguity_rejects_duplicated_guards() {
        let result = MachineBuilder::new()
            .initial(1u32)
            .state(
                idle(1)
                    .transition(Signal::Go, Latch::Hot, 2u32)
                    .transition(Signal::Go, Latch::Hot, 1u32),
            )
            .unwrap()
            .state(idle(2))
            .unwrap()
            .deny_ambiguity()
            .build();
        assert!(matches!(
            result,
            Err(BuildError::AmbiguousTransition(id)) if id == StateId(1)
        ));
    }

    #[test]
    fn deny_ambiguity_accepts_distinct_guards() {
        let machine = MachineBuilder::new()
            .initial(1u32)
            .state(
                idle(1)
                    .transition(Signal::Go, Latch::Hot, 2u32)
                    .transition(Signal::Go, Latch::Neutral, 1u32),
            )
            .unwrap()
            .state(idle(2))
            .unwrap()
            .deny_ambiguity()
            .build();
        assert!(machine.is_ok());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial(1u32)
            .state(idle(1).transition(Signal::Go, Latch::Hot, 2u32))
            .unwrap()
            .state(idle(2))
            .unwrap()
            .final_states([2u32])
            .build()
            .unwrap();

        assert_eq!(machine.initial_state(), StateId(1));
        assert!(machine.is_final(StateId(2)));
        assert_eq!(machine.len(), 2);
    }

    #[test]
    fn add_state_accepts_prebuilt_states() {
        let prebuilt = idle(1).build().unwrap();
        let machine = MachineBuilder::new()
            .initial(1u32)
            .add_state(prebuilt)
            .build()
            .unwrap();
        assert!(machine.has_state(StateId(1)));
    }
}
