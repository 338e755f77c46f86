//! Transition table, state inventory and lookup.

use crate::core::{State, Symbol, Transition};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A deterministic finite automaton.
///
/// Owns the transition list, the start state and the accepting set, and
/// keeps the state inventory and an outgoing-edge index in sync with the
/// transitions on every insertion.
///
/// Determinism per `(state, symbol)` is assumed, not enforced. If several
/// transitions leave the same state on the same symbol, lookup uses the one
/// inserted first.
#[derive(Clone, Debug)]
pub struct Automaton<S: State, A: Symbol> {
    transitions: Vec<Transition<S, A>>,
    start_state: S,
    accepted_states: Vec<S>,
    states: Vec<S>,
    outgoing: HashMap<S, Vec<usize>>,
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Create an automaton from an initial transition set.
    ///
    /// The transitions are stored as given, in order. The accepting set is
    /// deduplicated and may name states that no transition touches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::Transition;
    /// use dfa_engine::engine::Automaton;
    ///
    /// let automaton: Automaton<String, char> = Automaton::new(
    ///     vec![
    ///         Transition::new("S0", "S1", '1'),
    ///         Transition::new("S1", "S0", '1'),
    ///     ],
    ///     "S0",
    ///     ["S0"],
    /// );
    ///
    /// assert_eq!(automaton.states(), ["S0", "S1"]);
    /// ```
    pub fn new<T, I>(transitions: T, start_state: impl Into<S>, accepted_states: I) -> Self
    where
        T: IntoIterator<Item = Transition<S, A>>,
        I: IntoIterator,
        I::Item: Into<S>,
    {
        let mut accepted = Vec::new();
        for state in accepted_states {
            let state = state.into();
            if !accepted.contains(&state) {
                accepted.push(state);
            }
        }

        let mut automaton = Self {
            transitions: Vec::new(),
            start_state: start_state.into(),
            accepted_states: accepted,
            states: Vec::new(),
            outgoing: HashMap::new(),
        };
        for transition in transitions {
            automaton.append(transition);
        }
        automaton
    }

    /// Insert a transition unless an identical one is already present.
    ///
    /// Returns `true` if the transition was added. Inserting an exact
    /// duplicate leaves the automaton untouched.
    pub fn add_transition(&mut self, transition: Transition<S, A>) -> bool {
        if self.transitions.contains(&transition) {
            debug!(%transition, "ignoring duplicate transition");
            return false;
        }
        self.append(transition);
        true
    }

    fn append(&mut self, transition: Transition<S, A>) {
        self.note_state(&transition.from_state);
        self.note_state(&transition.to_state);
        self.outgoing
            .entry(transition.from_state.clone())
            .or_default()
            .push(self.transitions.len());
        self.transitions.push(transition);
    }

    fn note_state(&mut self, state: &S) {
        if !self.states.contains(state) {
            self.states.push(state.clone());
        }
    }

    /// All transitions, in insertion order.
    pub fn transitions(&self) -> &[Transition<S, A>] {
        &self.transitions
    }

    /// The state every traversal begins in.
    pub fn start_state(&self) -> &S {
        &self.start_state
    }

    /// Accepting states, deduplicated, in the order they were given.
    pub fn accepted_states(&self) -> &[S] {
        &self.accepted_states
    }

    /// Every state appearing as an endpoint of some transition, in order of
    /// first appearance.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Whether `state` is in the accepting set.
    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepted_states.contains(state)
    }

    /// Transitions leaving `state`, in insertion order.
    ///
    /// Empty for states without outgoing edges and for unknown states.
    pub fn outgoing_edges(&self, state: &S) -> Vec<&Transition<S, A>> {
        self.outgoing
            .get(state)
            .map(|indices| indices.iter().map(|&i| &self.transitions[i]).collect())
            .unwrap_or_default()
    }

    /// Destination of the first transition leaving `state` on `symbol`.
    pub fn lookup(&self, state: &S, symbol: &A) -> Option<&S> {
        self.outgoing.get(state).and_then(|indices| {
            indices
                .iter()
                .map(|&i| &self.transitions[i])
                .find(|transition| &transition.value == symbol)
                .map(|transition| &transition.to_state)
        })
    }
}

fn join<S: fmt::Display>(items: &[S]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<S: State, A: Symbol> fmt::Display for Automaton<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: {}", join(&self.states))?;
        writeln!(f, "Start State: {}", self.start_state)?;
        writeln!(f, "Accepted States: {}", join(&self.accepted_states))?;
        writeln!(f, "Transitions:")?;
        for transition in &self.transitions {
            writeln!(f, "  {transition}")?;
        }
        Ok(())
    }
}
