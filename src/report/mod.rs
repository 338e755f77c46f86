//! Reporting sinks for traversal and batch events.
//!
//! The engine never prints. Every observable event of a run is handed to a
//! [`Reporter`], and every method has an empty default body, so a sink only
//! implements what it cares about. Correctness never depends on the sink:
//! [`NoopReporter`] discards everything.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::core::{Outcome, Transition};
//! use dfa_engine::engine::Automaton;
//! use dfa_engine::report::{Event, Recorder};
//!
//! let automaton: Automaton<String, char> = Automaton::new(
//!     vec![Transition::new("A", "B", 'x')],
//!     "A",
//!     ["B"],
//! );
//!
//! let mut recorder = Recorder::new();
//! let outcome = automaton.travel("x".chars(), true, &mut recorder);
//!
//! assert_eq!(outcome, Outcome::Accepted);
//! assert_eq!(recorder.events().len(), 2);
//! assert!(matches!(recorder.events()[1], Event::Finished { accepted: true, .. }));
//! ```

mod logging;
mod recorder;

pub use logging::TracingReporter;
pub use recorder::{Event, Recorder};

use crate::core::{Outcome, State, Symbol};
use crate::engine::BatchSummary;

/// Sink for the events emitted by [`Automaton::travel`](crate::engine::Automaton::travel)
/// and [`Automaton::test_all_binary`](crate::engine::Automaton::test_all_binary).
pub trait Reporter<S: State, A: Symbol> {
    /// A symbol was consumed at `index`. `to` is `None` for the move that stalled.
    /// Only emitted when step reporting is enabled.
    fn step(&mut self, _index: usize, _from: &S, _symbol: &A, _to: Option<&S>) {}

    /// No transition leaves `state` on `symbol`; the run is incomplete.
    fn stalled(&mut self, _state: &S, _symbol: &A) {}

    /// The whole input was consumed and the run ended in `state`.
    fn finished(&mut self, _state: &S, _accepted: bool) {}

    /// A batch sweep is about to run `input`.
    fn input_started(&mut self, _input: &str) {}

    /// A batch sweep finished running `input`.
    fn input_finished(&mut self, _input: &str, _outcome: Outcome) {}

    /// A batch sweep completed.
    fn summary(&mut self, _summary: &BatchSummary) {}
}

impl<S: State, A: Symbol, R: Reporter<S, A> + ?Sized> Reporter<S, A> for &mut R {
    fn step(&mut self, index: usize, from: &S, symbol: &A, to: Option<&S>) {
        (**self).step(index, from, symbol, to);
    }

    fn stalled(&mut self, state: &S, symbol: &A) {
        (**self).stalled(state, symbol);
    }

    fn finished(&mut self, state: &S, accepted: bool) {
        (**self).finished(state, accepted);
    }

    fn input_started(&mut self, input: &str) {
        (**self).input_started(input);
    }

    fn input_finished(&mut self, input: &str, outcome: Outcome) {
        (**self).input_finished(input, outcome);
    }

    fn summary(&mut self, summary: &BatchSummary) {
        (**self).summary(summary);
    }
}

/// Reporter that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl<S: State, A: Symbol> Reporter<S, A> for NoopReporter {}
