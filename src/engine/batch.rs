//! Exhaustive testing over fixed-width binary inputs.

use super::automaton::Automaton;
use crate::core::{Outcome, State};
use crate::report::Reporter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Widest sweep whose input count still fits in a `u64`.
pub const MAX_BITS: u32 = 63;

/// Errors that can occur when configuring a binary sweep.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BatchError {
    #[error("Bit width {bits} is too large (max: {max})")]
    WidthTooLarge { bits: u32, max: u32 },
}

/// Configuration for [`Automaton::test_all_binary`].
///
/// Defaults sweep all 4-bit inputs, zero-padded, without step reporting.
///
/// # Example
///
/// ```rust
/// use dfa_engine::engine::BatchOptions;
///
/// let options: BatchOptions = serde_json::from_str(r#"{ "bits": 3 }"#).unwrap();
/// assert_eq!(options.bits, 3);
/// assert!(options.padding);
/// assert!(!options.show_steps);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Bit width `n`; every integer in `0..2^n` is tried
    pub bits: u32,
    /// Forward step events of each run to the reporter
    pub show_steps: bool,
    /// Left-pad every rendering with `'0'` to exactly `bits` characters
    pub padding: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            bits: 4,
            show_steps: false,
            padding: true,
        }
    }
}

impl BatchOptions {
    /// Options for a `bits`-wide sweep, other fields at their defaults.
    pub fn new(bits: u32) -> Self {
        Self {
            bits,
            ..Self::default()
        }
    }

    /// Forward step events of each run to the reporter.
    pub fn show_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    /// Zero-pad renderings to exactly `bits` characters.
    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    fn validate(&self) -> Result<(), BatchError> {
        if self.bits > MAX_BITS {
            return Err(BatchError::WidthTooLarge {
                bits: self.bits,
                max: MAX_BITS,
            });
        }
        Ok(())
    }

    /// Number of inputs the sweep enumerates, `2^bits`.
    pub fn input_count(&self) -> u64 {
        1u64 << self.bits
    }

    /// Binary rendering of `value` under these options.
    ///
    /// Unpadded renderings are the shortest form, so `0` renders as `"0"`.
    pub fn render(&self, value: u64) -> String {
        if self.padding {
            format!("{:0width$b}", value, width = self.bits as usize)
        } else {
            format!("{value:b}")
        }
    }
}

/// Outcome counters for a set of runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub accepted: u64,
    pub rejected: u64,
    pub failed: u64,
}

impl Tally {
    /// Count one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Accepted => self.accepted += 1,
            Outcome::Rejected => self.rejected += 1,
            Outcome::Incomplete => self.failed += 1,
        }
    }

    /// Combine two disjoint tallies.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            accepted: self.accepted + other.accepted,
            rejected: self.rejected + other.rejected,
            failed: self.failed + other.failed,
        }
    }

    /// Number of runs counted.
    pub fn total(&self) -> u64 {
        self.accepted + self.rejected + self.failed
    }
}

/// Aggregate result of a binary sweep.
///
/// `accepted + rejected + failed` always equals `2^bits`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Bit width of the sweep
    pub bits: u32,
    /// Inputs ending in an accepting state
    pub accepted: u64,
    /// Inputs ending in a non-accepting state
    pub rejected: u64,
    /// Inputs that stalled before the end
    pub failed: u64,
    /// When the sweep started
    pub started_at: DateTime<Utc>,
    /// When the sweep finished
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    fn from_tally(bits: u32, tally: Tally, started_at: DateTime<Utc>) -> Self {
        Self {
            bits,
            accepted: tally.accepted,
            rejected: tally.rejected,
            failed: tally.failed,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Runs that consumed their whole input.
    pub fn decided(&self) -> u64 {
        self.accepted + self.rejected
    }

    /// Number of inputs swept, `2^bits`.
    pub fn total(&self) -> u64 {
        self.decided() + self.failed
    }

    /// Wall-clock time the sweep took, if the clock did not go backwards.
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .ok()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} accepted, {} failed",
            self.accepted,
            self.decided(),
            self.failed
        )
    }
}

impl<S: State> Automaton<S, char> {
    /// Run every integer in `0..2^bits`, rendered in binary, through the
    /// automaton in ascending order and tally the outcomes.
    ///
    /// The reporter sees `input_started`, the run's own events, then
    /// `input_finished` for each input, and `summary` once at the end.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::builder::AutomatonBuilder;
    /// use dfa_engine::engine::BatchOptions;
    /// use dfa_engine::report::NoopReporter;
    ///
    /// let ends_in_one = AutomatonBuilder::<String, char>::new()
    ///     .start("q0")
    ///     .accept("q1")
    ///     .edge("q0", '0', "q0")
    ///     .edge("q0", '1', "q1")
    ///     .edge("q1", '0', "q0")
    ///     .edge("q1", '1', "q1")
    ///     .build()
    ///     .unwrap();
    ///
    /// let summary = ends_in_one
    ///     .test_all_binary(&BatchOptions::new(3), NoopReporter)
    ///     .unwrap();
    /// assert_eq!((summary.accepted, summary.rejected, summary.failed), (4, 4, 0));
    /// ```
    pub fn test_all_binary<R>(
        &self,
        options: &BatchOptions,
        mut reporter: R,
    ) -> Result<BatchSummary, BatchError>
    where
        R: Reporter<S, char>,
    {
        options.validate()?;
        let started_at = Utc::now();
        let mut tally = Tally::default();

        for value in 0..options.input_count() {
            let input = options.render(value);
            reporter.input_started(&input);
            let outcome = self.travel(input.chars(), options.show_steps, &mut reporter);
            reporter.input_finished(&input, outcome);
            tally.record(outcome);
        }

        let summary = BatchSummary::from_tally(options.bits, tally, started_at);
        reporter.summary(&summary);
        Ok(summary)
    }

    /// Parallel variant of [`test_all_binary`](Self::test_all_binary).
    ///
    /// Inputs are split across rayon's thread pool with one tally per
    /// partition, merged at the end. No per-input events are emitted, so
    /// there is no reporter.
    #[cfg(feature = "parallel")]
    pub fn test_all_binary_par(&self, options: &BatchOptions) -> Result<BatchSummary, BatchError> {
        use rayon::prelude::*;
        use tracing::info;

        options.validate()?;
        let started_at = Utc::now();

        let tally = (0..options.input_count())
            .into_par_iter()
            .fold(Tally::default, |mut tally, value| {
                tally.record(self.run(options.render(value).chars()));
                tally
            })
            .reduce(Tally::default, Tally::merge);

        let summary = BatchSummary::from_tally(options.bits, tally, started_at);
        info!(
            bits = summary.bits,
            accepted = summary.accepted,
            rejected = summary.rejected,
            failed = summary.failed,
            "parallel binary sweep finished"
        );
        Ok(summary)
    }
}
