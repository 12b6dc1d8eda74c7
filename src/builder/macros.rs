//! Macros for declaring transition tables.

/// Declare an ordered transition list.
///
/// Each entry reads `(event, register) => target`; entries keep their
/// written order, which matters because resolution lets the last matching
/// rule win. Targets may be `StateId` values or plain `u32` literals.
///
/// # Example
///
/// ```rust
/// use mealy::{transition_table, StateId, Transition};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Signal {
///     Advance,
///     Abort,
/// }
///
/// const DONE: StateId = StateId(3);
///
/// let rules: Vec<Transition<Signal, bool>> = transition_table![
///     (Signal::Advance, true) => 2,
///     (Signal::Abort, false) => DONE,
/// ];
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].target, DONE);
/// ```
#[macro_export]
macro_rules! transition_table {
    ($( ($event:expr, $register:expr) => $target:expr ),* $(,)?) => {
        vec![
            $(
                $crate::Transition {
                    event: $event,
                    register: $register,
                    target: $crate::StateId::from($target),
                }
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{StateId, Transition};

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Tick,
        Tock,
    }

    #[test]
    fn macro_preserves_entry_order() {
        let rules: Vec<Transition<Signal, u32>> = transition_table![
            (Signal::Tick, 0) => 2,
            (Signal::Tick, 0) => 3,
            (Signal::Tock, 1) => 4,
        ];

        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].target, StateId(2));
        assert_eq!(rules[1].target, StateId(3));
        assert_eq!(rules[2].target, StateId(4));
    }

    #[test]
    fn macro_accepts_state_id_targets() {
        const HOME: StateId = StateId(1);
        let rules: Vec<Transition<Signal, bool>> = transition_table![
            (Signal::Tock, true) => HOME,
        ];
        assert_eq!(rules[0].target, HOME);
    }

    #[test]
    fn empty_table_is_legal() {
        let rules: Vec<Transition<Signal, bool>> = transition_table![];
        assert!(rules.is_empty());
    }
}
