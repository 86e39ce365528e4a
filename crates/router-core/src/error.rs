//! Error types for routing configuration.

use thiserror::Error;

/// Errors detected while loading routing configuration.
///
/// These are the only hard failures in the engine. A query that matches
/// nothing is a normal return value, never an error; a configuration that
/// contradicts itself must prevent the router from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The same surface form is registered for two different canonical terms.
    #[error("synonym '{surface}' maps to both '{existing}' and '{conflicting}'")]
    DuplicateSynonym {
        surface: String,
        existing: String,
        conflicting: String,
    },

    /// The same phrase is registered in two different patterns.
    #[error("pattern phrase '{phrase}' is bound to both '{existing_tool}' and '{conflicting_tool}'")]
    DuplicatePatternPhrase {
        phrase: String,
        existing_tool: String,
        conflicting_tool: String,
    },

    /// A pattern was registered without any phrases.
    #[error("pattern for tool '{tool}' has no phrases")]
    EmptyPattern { tool: String },
}
