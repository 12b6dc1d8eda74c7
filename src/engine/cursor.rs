//! The run-time cursor and the poll algorithm.

use crate::core::{Event, Fault, History, Lifecycle, Register, StateId, TransitionRecord};
use crate::engine::machine::Machine;
use chrono::Utc;

/// Mutable execution state of one run over a [`Machine`].
///
/// The cursor owns the current state, the output register, the fault flag,
/// and the caller context; the machine it borrows stays immutable for the
/// cursor's whole lifetime. Advancement happens only when the host calls
/// [`poll`](Cursor::poll); there is no background activity and no I/O
/// performed by the engine itself.
///
/// The cursor is single-writer by construction: `poll` takes `&mut self`,
/// so concurrent polling of one cursor is ruled out at compile time. To
/// run the same machine from several threads, give each worker its own
/// cursor.
pub struct Cursor<'m, R, E, C> {
    machine: &'m Machine<R, E, C>,
    current: StateId,
    register: R,
    fault: Fault,
    context: C,
    history: History,
}

impl<'m, R: Register, E: Event, C> Cursor<'m, R, E, C> {
    pub(crate) fn new(machine: &'m Machine<R, E, C>, current: StateId, context: C) -> Self {
        Self {
            machine,
            current,
            register: R::default(),
            fault: Fault::None,
            context,
            history: History::new(),
        }
    }

    pub(crate) fn resumed(
        machine: &'m Machine<R, E, C>,
        current: StateId,
        register: R,
        fault: Fault,
        history: History,
        context: C,
    ) -> Self {
        Self {
            machine,
            current,
            register,
            fault,
            context,
            history,
        }
    }

    /// Identifier of the active state.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Current value of the output register.
    pub fn register(&self) -> &R {
        &self.register
    }

    /// The recorded fault, `Fault::None` while the cursor is healthy.
    pub fn fault(&self) -> Fault {
        self.fault
    }

    /// Whether the active state is a member of the final-state set.
    pub fn is_accepted(&self) -> bool {
        self.machine.is_final(self.current)
    }

    /// Borrow the caller context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutably borrow the caller context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the cursor and reclaim the caller context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Log of the transitions this cursor has resolved.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Advance the machine by one tick.
    ///
    /// One poll performs, in order:
    /// 1. Invoke the active state's function, which may overwrite the
    ///    output register and returns an optional event code.
    /// 2. Acceptance check: if the active state is in the final-state set,
    ///    return [`Lifecycle::Accepted`] without attempting any transition.
    ///    A parked final state keeps executing its function on every poll.
    /// 3. If the function returned no event, return [`Lifecycle::None`].
    /// 4. Scan the active state's transition table in order. A rule matches
    ///    when its event equals the returned event and its register value
    ///    equals the current register. The scan does not stop at the first
    ///    match: the last matching rule in table order wins, so a table can
    ///    encode an explicit override by placing the intended winner last.
    /// 5. No match: record [`Fault::NoValidTransition`] and return
    ///    [`Lifecycle::Faulted`]. The fault is terminal for this cursor.
    /// 6. Match: invoke the old state's exit hook, move the cursor, invoke
    ///    the new state's enter hook (in that order, both receiving
    ///    `(old, new)`), and return [`Lifecycle::StateChanged`].
    ///
    /// Polling a cursor whose fault is already set returns
    /// [`Lifecycle::Faulted`] immediately, with no callbacks invoked.
    pub fn poll(&mut self) -> Lifecycle {
        if self.fault.is_set() {
            return Lifecycle::Faulted;
        }

        let machine = self.machine;
        let state = machine.slot(self.current);

        let event = (state.function)(&mut self.register, &mut self.context);

        if machine.is_final(self.current) {
            tracing::debug!(state = %self.current, "accepted");
            return Lifecycle::Accepted;
        }

        let Some(event) = event else {
            return Lifecycle::None;
        };

        // Last match wins: every later match overwrites the pending target.
        let mut target = None;
        for rule in &state.transitions {
            if rule.matches(&event, &self.register) {
                target = Some(rule.target);
            }
        }

        let Some(next) = target else {
            tracing::warn!(state = %self.current, event = ?event, "no valid transition");
            self.fault = Fault::NoValidTransition;
            return Lifecycle::Faulted;
        };

        let previous = self.current;
        if let Some(exit) = &state.exit {
            exit(Some(previous), next, &mut self.context);
        }
        self.current = next;
        if let Some(enter) = &machine.slot(next).enter {
            enter(Some(previous), next, &mut self.context);
        }
        self.history.record(TransitionRecord {
            from: previous,
            to: next,
            timestamp: Utc::now(),
        });
        tracing::debug!(from = %previous, to = %next, "state changed");
        Lifecycle::StateChanged
    }
}
