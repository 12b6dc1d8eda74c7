//! Builder for constructing machine states.

use crate::builder::error::BuildError;
use crate::core::{ChangeHook, State, StateFn, StateId, Transition};

/// Builder for one machine state with a fluent API.
///
/// The work function is required; name, hooks, and transitions are
/// optional. A state with no transitions is legal: it either belongs to
/// the final-state set or faults on its first emitted event.
///
/// # Example
///
/// ```rust
/// use mealy::builder::StateBuilder;
/// use mealy::StateId;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Signal {
///     Done,
/// }
///
/// let state = StateBuilder::new(StateId(1))
///     .named("worker")
///     .on_poll(|flag: &mut bool, _: &mut ()| {
///         *flag = true;
///         Some(Signal::Done)
///     })
///     .transition(Signal::Done, true, StateId(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(state.id(), StateId(1));
/// assert_eq!(state.transitions().len(), 1);
/// ```
pub struct StateBuilder<R, E, C> {
    id: StateId,
    name: Option<String>,
    function: Option<StateFn<R, E, C>>,
    enter: Option<ChangeHook<C>>,
    exit: Option<ChangeHook<C>>,
    transitions: Vec<Transition<E, R>>,
}

impl<R, E, C> StateBuilder<R, E, C> {
    /// Start building the state with this identifier.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            function: None,
            enter: None,
            exit: None,
            transitions: Vec::new(),
        }
    }

    /// Attach a human label used in diagnostics (optional).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the work function invoked on every poll (required).
    pub fn on_poll<F>(mut self, function: F) -> Self
    where
        F: Fn(&mut R, &mut C) -> Option<E> + Send + Sync + 'static,
    {
        self.function = Some(Box::new(function));
        self
    }

    /// Set the hook invoked when the cursor enters this state (optional).
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<StateId>, StateId, &mut C) + Send + Sync + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked when the cursor leaves this state (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<StateId>, StateId, &mut C) + Send + Sync + 'static,
    {
        self.exit = Some(Box::new(hook));
        self
    }

    /// Append one transition rule. Table order is significant: on a tie,
    /// the rule added last wins.
    pub fn transition(mut self, event: E, register: R, target: impl Into<StateId>) -> Self {
        self.transitions.push(Transition {
            event,
            register,
            target: target.into(),
        });
        self
    }

    /// Append several pre-built transition rules, preserving their order.
    pub fn transitions(mut self, rules: impl IntoIterator<Item = Transition<E, R>>) -> Self {
        self.transitions.extend(rules);
        self
    }

    /// Build the state.
    pub fn build(self) -> Result<State<R, E, C>, BuildError> {
        let function = self.function.ok_or(BuildError::MissingFunction(self.id))?;

        Ok(State {
            id: self.id,
            name: self.name,
            function,
            enter: self.enter,
            exit: self.exit,
            transitions: self.transitions,
        })
    }
}
