//! Single-input simulation.

use super::automaton::Automaton;
use crate::core::{Outcome, Stall, State, Step, Symbol, Trace};
use crate::report::{NoopReporter, Reporter};

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Feed `input` through the automaton from the start state.
    ///
    /// Stops at the first symbol with no matching transition and returns
    /// [`Outcome::Incomplete`]; the remaining input is not read. Otherwise
    /// the outcome depends on whether the final state is accepting. An empty
    /// input is decided by the start state alone.
    ///
    /// Step events are only sent to `reporter` when `show_steps` is set;
    /// stall and final-state events are always sent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::{Outcome, Transition};
    /// use dfa_engine::engine::Automaton;
    /// use dfa_engine::report::NoopReporter;
    ///
    /// let automaton: Automaton<String, char> = Automaton::new(
    ///     vec![Transition::new("S0", "S1", '1')],
    ///     "S0",
    ///     ["S1"],
    /// );
    ///
    /// assert_eq!(automaton.travel("1".chars(), false, NoopReporter), Outcome::Accepted);
    /// assert_eq!(automaton.travel("".chars(), false, NoopReporter), Outcome::Rejected);
    /// assert_eq!(automaton.travel("11".chars(), false, NoopReporter), Outcome::Incomplete);
    /// ```
    pub fn travel<I, R>(&self, input: I, show_steps: bool, mut reporter: R) -> Outcome
    where
        I: IntoIterator<Item = A>,
        R: Reporter<S, A>,
    {
        let mut current = self.start_state();

        for (index, symbol) in input.into_iter().enumerate() {
            match self.lookup(current, &symbol) {
                Some(next) => {
                    if show_steps {
                        reporter.step(index, current, &symbol, Some(next));
                    }
                    current = next;
                }
                None => {
                    if show_steps {
                        reporter.step(index, current, &symbol, None);
                    }
                    reporter.stalled(current, &symbol);
                    return Outcome::Incomplete;
                }
            }
        }

        let accepted = self.is_accepting(current);
        reporter.finished(current, accepted);
        Outcome::from_acceptance(accepted)
    }

    /// [`travel`](Self::travel) without any reporting.
    pub fn run<I>(&self, input: I) -> Outcome
    where
        I: IntoIterator<Item = A>,
    {
        self.travel(input, false, NoopReporter)
    }

    /// Run `input` and record every step, the stall if any, and the outcome.
    pub fn trace<I>(&self, input: I) -> Trace<S, A>
    where
        I: IntoIterator<Item = A>,
    {
        let mut recorder = TraceRecorder {
            trace: Trace::new(self.start_state().clone()),
            position: 0,
        };
        let outcome = self.travel(input, true, &mut recorder);
        recorder.trace.set_outcome(outcome);
        recorder.trace
    }
}

struct TraceRecorder<S: State, A: Symbol> {
    trace: Trace<S, A>,
    position: usize,
}

impl<S: State, A: Symbol> Reporter<S, A> for TraceRecorder<S, A> {
    fn step(&mut self, index: usize, from: &S, symbol: &A, to: Option<&S>) {
        self.position = index;
        if let Some(to) = to {
            self.trace.push_step(Step {
                index,
                from: from.clone(),
                symbol: symbol.clone(),
                to: to.clone(),
            });
        }
    }

    fn stalled(&mut self, state: &S, symbol: &A) {
        self.trace.set_stall(Stall {
            index: self.position,
            state: state.clone(),
            symbol: symbol.clone(),
        });
    }
}
