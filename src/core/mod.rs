//! Core automaton value types.
//!
//! This module contains the plain data the engine works with:
//! - State and symbol tokens via the `State` and `Symbol` traits
//! - Labeled edges (`Transition`)
//! - The three-valued `Outcome` of a run
//! - Recorded runs (`Trace`)
//!
//! Nothing here performs a traversal; see [`crate::engine`] for that.

mod outcome;
mod state;
mod trace;
mod transition;

pub use outcome::Outcome;
pub use state::{State, Symbol};
pub use trace::{Stall, Step, Trace};
pub use transition::Transition;
