//! The automaton and the algorithms that run it.
//!
//! # Key Concepts
//!
//! - **Automaton**: owns the transition table, start state and accepting set
//! - **Travel**: simulate one input, yielding a three-valued [`Outcome`](crate::core::Outcome)
//! - **Binary sweep**: run every `n`-bit binary string and tally the outcomes
//!
//! Traversals only read the automaton. Everything observable goes through
//! a [`Reporter`](crate::report::Reporter).

mod automaton;
mod batch;
mod travel;

pub use automaton::Automaton;
pub use batch::{BatchError, BatchOptions, BatchSummary, Tally, MAX_BITS};
