//! Setup errors. Gameplay itself never fails: invalid moves are no-ops.

use thiserror::Error;

/// Errors raised while building a game from its configuration or data.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The secret word has no letters.
    #[error("secret word must not be empty")]
    EmptySecretWord,

    /// The secret word contains something other than `a..=z`.
    #[error("secret word {word:?} must contain only lowercase letters a-z")]
    InvalidSecretWord { word: String },

    /// The escalation list has no entries, so no wrong-guess budget exists.
    #[error("escalation list must have at least one entry")]
    EmptyEscalation,

    /// The vocabulary has no words to pick from.
    #[error("vocabulary must contain at least one word")]
    EmptyWordList,

    /// The vocabulary has no farewell templates.
    #[error("vocabulary must contain at least one farewell template")]
    EmptyFarewells,

    /// Vocabulary JSON could not be parsed.
    #[error("failed to parse vocabulary: {0}")]
    Vocabulary(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
