//! Marker traits for state identifiers and input symbols.
//!
//! States and symbols are opaque tokens: the engine only ever compares,
//! hashes, clones and displays them. Both traits are blanket-implemented,
//! so any type meeting the bounds can be used directly.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a node in the automaton's transition graph.
///
/// # Required Traits
///
/// - `Clone`: states are copied into traces and reports
/// - `Eq` + `Hash`: states key the outgoing-edge index
/// - `Debug` + `Display`: states appear in diagnostics and step reports
/// - `Serialize` + `Deserialize`: states are stored in a
///   [`Definition`](crate::definition::Definition)
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<String>();
/// assert_state::<u32>();
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> State for T where
    T: Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// A single input symbol, the label on a transition.
///
/// Same bounds as [`State`]. `char` is the usual choice and the one the
/// exhaustive binary sweep works with.
pub trait Symbol:
    Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
