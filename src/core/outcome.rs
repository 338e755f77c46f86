//! Three-valued traversal outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of feeding one input sequence through an automaton.
///
/// `Incomplete` is deliberately not a flavour of `Rejected`: it means the
/// automaton had no transition for some symbol and could not finish
/// reading the input.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Outcome;
///
/// assert!(Outcome::Accepted.is_accepted());
/// assert!(Outcome::Rejected.is_decided());
/// assert!(!Outcome::Incomplete.is_decided());
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// Input fully consumed, final state is accepting
    Accepted,
    /// Input fully consumed, final state is not accepting
    Rejected,
    /// Traversal stalled on a symbol with no matching transition
    Incomplete,
}

impl Outcome {
    /// Classify a fully consumed run by whether its final state accepts.
    pub fn from_acceptance(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }

    /// True only for [`Outcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// True when the whole input was consumed (accepted or rejected).
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Incomplete)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Incomplete => "failed",
        };
        f.write_str(label)
    }
}
