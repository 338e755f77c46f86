//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a table macro for creating
//! automata with minimal boilerplate while validating the start state.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
