//! Transition rules.

use super::state::StateId;

/// One transition rule, scoped to the state whose table holds it.
///
/// Reads: "while in this state, if the function returns `event` AND the
/// output register currently equals `register`, move to `target`."
///
/// Order within a state's table is significant: resolution scans the whole
/// table and the last matching rule wins, so a later rule deliberately
/// overrides an earlier one sharing the same guard.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<E, R> {
    /// Event code this rule fires on.
    pub event: E,
    /// Output-register value required for this rule to match.
    pub register: R,
    /// State the cursor moves to when this rule wins.
    pub target: StateId,
}

impl<E: PartialEq, R: PartialEq> Transition<E, R> {
    /// Whether this rule matches the given event and register value.
    pub fn matches(&self, event: &E, register: &R) -> bool {
        self.event == *event && self.register == *register
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Advance,
        Reset,
    }

    #[derive(Clone, PartialEq, Debug, Default)]
    enum Latch {
        #[default]
        Neutral,
        Armed,
    }

    #[test]
    fn matches_requires_both_event_and_register() {
        let rule = Transition {
            event: Signal::Advance,
            register: Latch::Armed,
            target: StateId(2),
        };

        assert!(rule.matches(&Signal::Advance, &Latch::Armed));
        assert!(!rule.matches(&Signal::Advance, &Latch::Neutral));
        assert!(!rule.matches(&Signal::Reset, &Latch::Armed));
    }

    #[test]
    fn rules_with_same_guard_may_differ_in_target() {
        let first = Transition {
            event: Signal::Advance,
            register: Latch::Neutral,
            target: StateId(2),
        };
        let second = Transition {
            event: Signal::Advance,
            register: Latch::Neutral,
            target: StateId(3),
        };

        assert!(first.matches(&Signal::Advance, &Latch::Neutral));
        assert!(second.matches(&Signal::Advance, &Latch::Neutral));
        assert_ne!(first, second);
    }
}
