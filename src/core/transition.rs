//! Labeled edges between states.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One symbol-labeled edge of the transition graph.
///
/// Transitions are immutable values; equality is structural over all three
/// fields, which is what duplicate detection on insertion relies on.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Transition;
///
/// let edge: Transition<String, char> = Transition::new("S0", "S1", '1');
/// assert_eq!(edge.to_string(), "S0 --[1]--> S1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, A: Symbol> {
    /// The state the edge leaves
    pub from_state: S,
    /// The state the edge enters
    pub to_state: S,
    /// The input symbol that selects this edge
    pub value: A,
}

impl<S: State, A: Symbol> Transition<S, A> {
    /// Create a transition `from_state --[value]--> to_state`.
    pub fn new(from_state: impl Into<S>, to_state: impl Into<S>, value: A) -> Self {
        Self {
            from_state: from_state.into(),
            to_state: to_state.into(),
            value,
        }
    }

    /// Whether this edge leaves `state` on `symbol`.
    pub fn matches(&self, state: &S, symbol: &A) -> bool {
        &self.from_state == state && &self.value == symbol
    }
}

impl<S: State, A: Symbol> fmt::Display for Transition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --[{}]--> {}", self.from_state, self.value, self.to_state)
    }
}
