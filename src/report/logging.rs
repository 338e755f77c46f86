//! Reporter backed by `tracing`.

use super::Reporter;
use crate::core::{Outcome, State, Symbol};
use crate::engine::BatchSummary;
use tracing::{debug, info, warn};

/// Forwards every event to the active `tracing` subscriber.
///
/// Steps are logged at `debug`, stalls at `warn`, final states and batch
/// summaries at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl<S: State, A: Symbol> Reporter<S, A> for TracingReporter {
    fn step(&mut self, index: usize, from: &S, symbol: &A, to: Option<&S>) {
        match to {
            Some(to) => debug!(index, from = %from, symbol = %symbol, to = %to, "step"),
            None => debug!(index, from = %from, symbol = %symbol, "step has no destination"),
        }
    }

    fn stalled(&mut self, state: &S, symbol: &A) {
        warn!(
            state = %state,
            symbol = %symbol,
            "no outgoing transition for symbol; travel incomplete"
        );
    }

    fn finished(&mut self, state: &S, accepted: bool) {
        info!(final_state = %state, accepted, "travel finished");
    }

    fn input_started(&mut self, input: &str) {
        debug!(input, "running input");
    }

    fn input_finished(&mut self, input: &str, outcome: Outcome) {
        info!(input, outcome = %outcome, "input finished");
    }

    fn summary(&mut self, summary: &BatchSummary) {
        info!(
            bits = summary.bits,
            accepted = summary.accepted,
            decided = summary.decided(),
            failed = summary.failed,
            "binary sweep complete"
        );
    }
}
