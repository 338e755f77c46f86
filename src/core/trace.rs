//! Recorded traversals.
//!
//! A [`Trace`] is the full account of one run: every step taken, where the
//! run stalled (if it did), and how it ended.

use super::outcome::Outcome;
use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};

/// One successful move of a traversal.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State, A: Symbol> {
    /// Position of the consumed symbol in the input
    pub index: usize,
    /// The state the move left
    pub from: S,
    /// The symbol consumed
    pub symbol: A,
    /// The state the move entered
    pub to: S,
}

/// Where a traversal got stuck.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Stall<S: State, A: Symbol> {
    /// Position of the unmatched symbol in the input
    pub index: usize,
    /// The state with no matching outgoing edge
    pub state: S,
    /// The symbol nothing matched
    pub symbol: A,
}

/// Complete record of a traversal.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::AutomatonBuilder;
/// use dfa_engine::core::Outcome;
///
/// let automaton = AutomatonBuilder::<String, char>::new()
///     .start("even")
///     .accept("even")
///     .edge("even", '1', "odd")
///     .edge("odd", '1', "even")
///     .build()
///     .unwrap();
///
/// let trace = automaton.trace("11".chars());
/// assert_eq!(trace.outcome(), Outcome::Accepted);
/// assert_eq!(trace.path(), vec!["even", "odd", "even"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State, A: Symbol> {
    start: S,
    steps: Vec<Step<S, A>>,
    stall: Option<Stall<S, A>>,
    outcome: Outcome,
}

impl<S: State, A: Symbol> Trace<S, A> {
    pub(crate) fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
            stall: None,
            outcome: Outcome::Incomplete,
        }
    }

    pub(crate) fn push_step(&mut self, step: Step<S, A>) {
        self.steps.push(step);
    }

    pub(crate) fn set_stall(&mut self, stall: Stall<S, A>) {
        self.stall = Some(stall);
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// The state the run began in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Successful moves, in input order.
    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    /// The stall, if the run was incomplete.
    pub fn stall(&self) -> Option<&Stall<S, A>> {
        self.stall.as_ref()
    }

    /// How the run ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The state the run ended in, or `None` when it stalled.
    pub fn final_state(&self) -> Option<&S> {
        if self.stall.is_some() {
            return None;
        }
        Some(self.steps.last().map_or(&self.start, |step| &step.to))
    }

    /// States visited: the start state, then the destination of each step.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(&self.start);
        path.extend(self.steps.iter().map(|step| &step.to));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(index: usize, from: &str, symbol: char, to: &str) -> Step<String, char> {
        Step {
            index,
            from: from.to_string(),
            symbol,
            to: to.to_string(),
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: Trace<String, char> = Trace::new("S0".to_string());
        assert!(trace.steps().is_empty());
        assert!(trace.stall().is_none());
        assert_eq!(trace.path(), vec!["S0"]);
        assert_eq!(trace.final_state().map(String::as_str), Some("S0"));
    }

    #[test]
    fn path_follows_steps() {
        let mut trace = Trace::new("S0".to_string());
        trace.push_step(step(0, "S0", '1', "S1"));
        trace.push_step(step(1, "S1", '1', "S0"));
        trace.set_outcome(Outcome::Accepted);

        assert_eq!(trace.path(), vec!["S0", "S1", "S0"]);
        assert_eq!(trace.final_state().map(String::as_str), Some("S0"));
        assert_eq!(trace.outcome(), Outcome::Accepted);
    }

    #[test]
    fn stalled_trace_has_no_final_state() {
        let mut trace = Trace::new("S0".to_string());
        trace.push_step(step(0, "S0", '1', "S1"));
        trace.set_stall(Stall {
            index: 1,
            state: "S1".to_string(),
            symbol: '1',
        });

        assert!(trace.final_state().is_none());
        assert_eq!(trace.outcome(), Outcome::Incomplete);
        assert_eq!(trace.stall().map(|s| s.index), Some(1));
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = Trace::new("S0".to_string());
        trace.push_step(step(0, "S0", '0', "S0"));
        trace.set_outcome(Outcome::Rejected);

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace<String, char> = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
