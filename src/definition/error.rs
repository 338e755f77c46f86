//! Definition error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur when loading or saving automaton definitions
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The definition does not describe a valid automaton
    #[error("Invalid definition: {0}")]
    Build(#[from] BuildError),
}
