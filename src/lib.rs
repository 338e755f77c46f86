//! dfa-engine: a deterministic finite automaton engine
//!
//! An automaton is a table of labeled transitions, a start state and a set
//! of accepting states. Feeding it an input yields one of three outcomes:
//! the input is accepted, rejected, or the run is incomplete because some
//! symbol had no transition to follow.
//!
//! # Core Concepts
//!
//! - **Transition**: an immutable `from --[symbol]--> to` edge
//! - **Automaton**: owns the table, looks up edges and runs inputs
//! - **Outcome**: `Accepted`, `Rejected` or `Incomplete`, never collapsed
//! - **Binary sweep**: exhaustive testing over every `n`-bit binary string
//! - **Reporter**: pluggable sink for step, stall and summary events
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::core::Outcome;
//! use dfa_engine::engine::{Automaton, BatchOptions};
//! use dfa_engine::report::NoopReporter;
//! use dfa_engine::transitions;
//!
//! // Binary numbers read MSB-first; state is the remainder mod 3.
//! let automaton: Automaton<String, char> = Automaton::new(
//!     transitions![
//!         "S0", '0' => "S0";
//!         "S0", '1' => "S1";
//!         "S1", '0' => "S2";
//!         "S1", '1' => "S0";
//!         "S2", '0' => "S1";
//!         "S2", '1' => "S2";
//!     ],
//!     "S0",
//!     ["S0"],
//! );
//!
//! assert_eq!(automaton.run("110".chars()), Outcome::Accepted);
//! assert_eq!(automaton.run("101".chars()), Outcome::Rejected);
//!
//! let summary = automaton
//!     .test_all_binary(&BatchOptions::new(4), NoopReporter)
//!     .unwrap();
//! assert_eq!(summary.accepted + summary.rejected + summary.failed, 16);
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use self::core::{Outcome, State, Symbol, Trace, Transition};
pub use engine::{Automaton, BatchOptions, BatchSummary};
pub use report::{NoopReporter, Reporter};
