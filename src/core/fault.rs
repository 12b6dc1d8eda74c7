//! The fault taxonomy.
//!
//! Faults are terminal: once a cursor records one it never runs again.
//! The engine reports faults through the returned [`Lifecycle`] value and
//! the cursor's fault field; it never panics and never aborts the host.
//!
//! [`Lifecycle`]: crate::Lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fault condition recorded on a cursor.
///
/// Transitions only from `None` to a specific fault, never back.
/// The enum is non-exhaustive so hosts matching on it stay compatible
/// with fault kinds added in future revisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Fault {
    /// Normal operation, no fault recorded.
    #[default]
    None,
    /// The active state's function produced an event for which no
    /// transition rule matched the current output-register value.
    NoValidTransition,
}

impl Fault {
    /// Stable human-readable description of this fault.
    ///
    /// Handles every defined kind plus a fallback for kinds this build
    /// does not know about, so callers can always render a fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mealy::Fault;
    ///
    /// assert_eq!(Fault::None.describe(), "none");
    /// assert_eq!(
    ///     Fault::NoValidTransition.describe(),
    ///     "no valid transition for event"
    /// );
    /// ```
    pub fn describe(&self) -> &'static str {
        match self {
            Fault::None => "none",
            Fault::NoValidTransition => "no valid transition for event",
            #[allow(unreachable_patterns)]
            _ => "unknown fault",
        }
    }

    /// Whether a fault has been recorded.
    pub fn is_set(&self) -> bool {
        !matches!(self, Fault::None)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_none() {
        assert_eq!(Fault::None.describe(), "none");
    }

    #[test]
    fn describe_no_valid_transition() {
        assert_eq!(
            Fault::NoValidTransition.describe(),
            "no valid transition for event"
        );
    }

    #[test]
    fn display_matches_describe() {
        assert_eq!(Fault::None.to_string(), "none");
        assert_eq!(
            Fault::NoValidTransition.to_string(),
            "no valid transition for event"
        );
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Fault::default(), Fault::None);
        assert!(!Fault::default().is_set());
    }

    #[test]
    fn is_set_identifies_faults() {
        assert!(Fault::NoValidTransition.is_set());
        assert!(!Fault::None.is_set());
    }

    #[test]
    fn fault_round_trips_through_json() {
        let json = serde_json::to_string(&Fault::NoValidTransition).unwrap();
        let back: Fault = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Fault::NoValidTransition);
    }
}
