use serde::{Deserialize, Serialize};

use crate::core::escalation::EscalationList;
use crate::core::rng::Rng;
use crate::error::{EngineError, Result};

/// Placeholder replaced by the language name in farewell templates.
pub const NAME_PLACEHOLDER: &str = "{}";

/// Word list, escalation languages and farewell templates for a game.
/// Bundled by the game crate or loaded from JSON at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Candidate secret words (lowercase a-z).
    pub words: Vec<String>,
    /// Escalation entries, eliminated one per wrong guess.
    pub languages: Vec<Language>,
    /// Farewell templates; `{}` is replaced by the language name.
    pub farewells: Vec<String>,
}

/// A programming language chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    /// CSS background color (e.g., "#E2680F").
    pub background_color: String,
    /// CSS text color.
    pub color: String,
}

impl Language {
    pub fn new(name: &str, background_color: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            background_color: background_color.to_string(),
            color: color.to_string(),
        }
    }
}

impl Vocabulary {
    /// Build and validate a vocabulary.
    pub fn new(words: Vec<String>, languages: Vec<Language>, farewells: Vec<String>) -> Result<Self> {
        let vocabulary = Self {
            words,
            languages,
            farewells,
        };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Parse and validate a vocabulary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let vocabulary: Self = serde_json::from_str(json)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn validate(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }
        if let Some(word) = self
            .words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(EngineError::InvalidSecretWord { word: word.clone() });
        }
        if self.languages.is_empty() {
            return Err(EngineError::EmptyEscalation);
        }
        if self.farewells.is_empty() {
            return Err(EngineError::EmptyFarewells);
        }
        Ok(())
    }

    /// Pick a random secret word.
    pub fn pick_word(&self, rng: &mut Rng) -> &str {
        rng.pick(&self.words).map(String::as_str).unwrap_or_default()
    }

    /// Escalation list over the languages.
    pub fn escalation(&self) -> Result<EscalationList<Language>> {
        EscalationList::new(self.languages.clone())
    }

    /// Random farewell line for a language.
    pub fn farewell_text(&self, name: &str, rng: &mut Rng) -> String {
        match rng.pick(&self.farewells) {
            Some(template) => template.replace(NAME_PLACEHOLDER, name),
            None => format!("Farewell, {name}"),
        }
    }
}
