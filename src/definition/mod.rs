//! Serializable automaton definitions.
//!
//! A [`Definition`] is the plain-data form of an automaton: start state,
//! accepting states and transition table. It is how automata are loaded
//! from configuration and written back out.

use crate::builder::BuildError;
use crate::core::{State, Symbol, Transition};
use crate::engine::Automaton;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

fn current_version() -> u32 {
    DEFINITION_VERSION
}

/// Serializable description of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Outcome;
/// use dfa_engine::definition::Definition;
///
/// let json = r#"{
///     "start_state": "S0",
///     "accepted_states": ["S1"],
///     "transitions": [
///         { "from_state": "S0", "to_state": "S1", "value": "a" }
///     ]
/// }"#;
///
/// let definition: Definition<String, char> = Definition::from_json(json).unwrap();
/// let automaton = definition.into_automaton().unwrap();
/// assert_eq!(automaton.run("a".chars()), Outcome::Accepted);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Definition<S: State, A: Symbol> {
    /// Definition format version
    #[serde(default = "current_version")]
    pub version: u32,

    /// State every traversal begins in
    pub start_state: Option<S>,

    /// States that accept a fully consumed input
    #[serde(default)]
    pub accepted_states: Vec<S>,

    /// Transition table, in insertion order
    #[serde(default)]
    pub transitions: Vec<Transition<S, A>>,
}

impl<S: State, A: Symbol> Definition<S, A> {
    /// Capture an existing automaton.
    pub fn from_automaton(automaton: &Automaton<S, A>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            start_state: Some(automaton.start_state().clone()),
            accepted_states: automaton.accepted_states().to_vec(),
            transitions: automaton.transitions().to_vec(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Parse from JSON, checking the format version.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    fn check_version(&self) -> Result<(), DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }

    /// Build the automaton this definition describes.
    ///
    /// The table is restored exactly as saved, duplicates and all, so any
    /// automaton captured with [`from_automaton`](Self::from_automaton) loads
    /// back unchanged. Only the version and the presence of a start state
    /// are checked.
    pub fn into_automaton(self) -> Result<Automaton<S, A>, DefinitionError> {
        self.check_version()?;
        let start = self.start_state.ok_or(BuildError::MissingStartState)?;

        Ok(Automaton::new(self.transitions, start, self.accepted_states))
    }
}

impl<S: State, A: Symbol> From<&Automaton<S, A>> for Definition<S, A> {
    fn from(automaton: &Automaton<S, A>) -> Self {
        Self::from_automaton(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::Outcome;

    fn parity() -> Automaton<String, char> {
        AutomatonBuilder::<String, char>::new()
            .start("even")
            .accept("even")
            .edge("even", '1', "odd")
            .edge("odd", '1', "even")
            .edge("even", '0', "even")
            .edge("odd", '0', "odd")
            .build()
            .unwrap()
    }

    #[test]
    fn definition_captures_automaton() {
        let automaton = parity();
        let definition = Definition::from_automaton(&automaton);

        assert_eq!(definition.version, DEFINITION_VERSION);
        assert_eq!(definition.start_state.as_deref(), Some("even"));
        assert_eq!(definition.accepted_states, vec!["even".to_string()]);
        assert_eq!(definition.transitions.len(), 4);
    }

    #[test]
    fn json_round_trip_preserves_behaviour() {
        let automaton = parity();
        let json = Definition::from(&automaton).to_json().unwrap();

        let restored = Definition::<String, char>::from_json(&json)
            .unwrap()
            .into_automaton()
            .unwrap();

        assert_eq!(restored.transitions(), automaton.transitions());
        assert_eq!(restored.states(), automaton.states());
        for input in ["", "1", "11", "1011"] {
            assert_eq!(restored.run(input.chars()), automaton.run(input.chars()));
        }
    }

    #[test]
    fn missing_version_defaults_to_current() {
        let json = r#"{ "start_state": "A", "accepted_states": ["A"] }"#;
        let definition: Definition<String, char> = Definition::from_json(json).unwrap();

        assert_eq!(definition.version, DEFINITION_VERSION);
        let automaton = definition.into_automaton().unwrap();
        assert_eq!(automaton.run("".chars()), Outcome::Accepted);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let json = r#"{ "version": 2, "start_state": "A" }"#;
        let result = Definition::<String, char>::from_json(json);

        assert!(matches!(
            result,
            Err(DefinitionError::UnsupportedVersion {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn missing_start_state_fails_fast() {
        let json = r#"{ "transitions": [ { "from_state": "A", "to_state": "B", "value": "x" } ] }"#;
        let definition: Definition<String, char> = Definition::from_json(json).unwrap();

        let result = definition.into_automaton();

        assert!(matches!(
            result,
            Err(DefinitionError::Build(BuildError::MissingStartState))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Definition::<String, char>::from_json("{ not json");
        assert!(matches!(result, Err(DefinitionError::DeserializationFailed(_))));
    }

    #[test]
    fn duplicate_rows_survive_round_trip() {
        let json = r#"{
            "start_state": "A",
            "transitions": [
                { "from_state": "A", "to_state": "B", "value": "x" },
                { "from_state": "A", "to_state": "B", "value": "x" }
            ]
        }"#;

        let automaton = Definition::<String, char>::from_json(json)
            .unwrap()
            .into_automaton()
            .unwrap();
        assert_eq!(automaton.transitions().len(), 2);

        let reloaded = Definition::<String, char>::from_json(
            &Definition::from(&automaton).to_json().unwrap(),
        )
        .unwrap()
        .into_automaton()
        .unwrap();
        assert_eq!(reloaded.transitions(), automaton.transitions());
    }

    #[test]
    fn start_outside_transitions_round_trips() {
        let automaton: Automaton<String, char> =
            Automaton::new(vec![Transition::new("A", "B", 'x')], "Z", ["Z"]);
        let json = Definition::from(&automaton).to_json().unwrap();

        let reloaded = Definition::<String, char>::from_json(&json)
            .unwrap()
            .into_automaton()
            .unwrap();

        assert_eq!(reloaded.start_state(), "Z");
        assert_eq!(reloaded.transitions(), automaton.transitions());
        assert_eq!(reloaded.run("".chars()), Outcome::Accepted);
        assert_eq!(reloaded.run("x".chars()), Outcome::Incomplete);
    }
}
