//! In-memory event capture.

use super::Reporter;
use crate::core::{Outcome, State, Symbol};
use crate::engine::BatchSummary;

/// A reporter event, as captured by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event<S: State, A: Symbol> {
    Step {
        index: usize,
        from: S,
        symbol: A,
        to: Option<S>,
    },
    Stalled {
        state: S,
        symbol: A,
    },
    Finished {
        state: S,
        accepted: bool,
    },
    InputStarted(String),
    InputFinished {
        input: String,
        outcome: Outcome,
    },
    Summary(BatchSummary),
}

/// Reporter that keeps every event in order.
///
/// Mostly useful in tests, where it replaces capturing console output.
#[derive(Clone, Debug)]
pub struct Recorder<S: State, A: Symbol> {
    events: Vec<Event<S, A>>,
}

impl<S: State, A: Symbol> Default for Recorder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> Recorder<S, A> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events received so far, oldest first.
    pub fn events(&self) -> &[Event<S, A>] {
        &self.events
    }

    /// Drain the recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<Event<S, A>> {
        std::mem::take(&mut self.events)
    }

    /// Step events only.
    pub fn steps(&self) -> impl Iterator<Item = &Event<S, A>> {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Step { .. }))
    }
}

impl<S: State, A: Symbol> Reporter<S, A> for Recorder<S, A> {
    fn step(&mut self, index: usize, from: &S, symbol: &A, to: Option<&S>) {
        self.events.push(Event::Step {
            index,
            from: from.clone(),
            symbol: symbol.clone(),
            to: to.cloned(),
        });
    }

    fn stalled(&mut self, state: &S, symbol: &A) {
        self.events.push(Event::Stalled {
            state: state.clone(),
            symbol: symbol.clone(),
        });
    }

    fn finished(&mut self, state: &S, accepted: bool) {
        self.events.push(Event::Finished {
            state: state.clone(),
            accepted,
        });
    }

    fn input_started(&mut self, input: &str) {
        self.events.push(Event::InputStarted(input.to_string()));
    }

    fn input_finished(&mut self, input: &str, outcome: Outcome) {
        self.events.push(Event::InputFinished {
            input: input.to_string(),
            outcome,
        });
    }

    fn summary(&mut self, summary: &BatchSummary) {
        self.events.push(Event::Summary(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let mut recorder: Recorder<String, char> = Recorder::new();
        let s0 = "S0".to_string();
        let s1 = "S1".to_string();

        recorder.step(0, &s0, &'1', Some(&s1));
        recorder.stalled(&s1, &'1');

        assert_eq!(
            recorder.events(),
            &[
                Event::Step {
                    index: 0,
                    from: s0.clone(),
                    symbol: '1',
                    to: Some(s1.clone()),
                },
                Event::Stalled {
                    state: s1,
                    symbol: '1',
                },
            ]
        );
        assert_eq!(recorder.steps().count(), 1);
    }

    #[test]
    fn take_empties_recorder() {
        let mut recorder: Recorder<String, char> = Recorder::new();
        recorder.input_started("01");
        recorder.input_finished("01", Outcome::Rejected);

        let events = recorder.take();
        assert_eq!(events.len(), 2);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn works_through_mutable_reference() {
        fn emit<R: Reporter<String, char>>(mut reporter: R) {
            reporter.finished(&"S0".to_string(), true);
        }

        let mut recorder = Recorder::new();
        emit(&mut recorder);
        assert_eq!(recorder.events().len(), 1);
    }
}
