//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Start state {state} does not appear in any transition")]
    UnknownStartState { state: String },
}
