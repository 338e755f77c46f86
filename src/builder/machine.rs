//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{State, Symbol, Transition};
use crate::engine::Automaton;

/// Builder for constructing automata with a fluent API.
///
/// Unlike [`Automaton::new`], the builder inserts transitions through the
/// idempotent path (exact duplicates are dropped) and validates the start
/// state before handing out an automaton.
pub struct AutomatonBuilder<S: State, A: Symbol> {
    start: Option<S>,
    accepted: Vec<S>,
    transitions: Vec<Transition<S, A>>,
}

impl<S: State, A: Symbol> AutomatonBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            accepted: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<S>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: impl Into<S>) -> Self {
        self.accepted.push(state.into());
        self
    }

    /// Mark several states as accepting.
    pub fn accept_all<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.accepted.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, transition: Transition<S, A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add the edge `from --[symbol]--> to`.
    pub fn edge(self, from: impl Into<S>, symbol: A, to: impl Into<S>) -> Self {
        self.transition(Transition::new(from, to, symbol))
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, A>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the automaton.
    ///
    /// Fails when no start state was given, or when transitions exist but
    /// none of them touches the start state.
    pub fn build(self) -> Result<Automaton<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let mut automaton = Automaton::new(Vec::new(), start, self.accepted);
        for transition in self.transitions {
            automaton.add_transition(transition);
        }

        let start = automaton.start_state();
        if !automaton.states().is_empty() && !automaton.states().contains(start) {
            return Err(BuildError::UnknownStartState {
                state: start.to_string(),
            });
        }

        Ok(automaton)
    }
}

impl<S: State, A: Symbol> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
