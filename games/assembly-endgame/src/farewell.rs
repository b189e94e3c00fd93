use guess_engine::error::Result;
use guess_engine::Vocabulary;

use crate::languages::languages;
use crate::words::WORDS;

/// Farewell templates; `{}` is the language being eliminated.
pub const FAREWELLS: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// The vocabulary shipped with the game.
pub fn builtin_vocabulary() -> Result<Vocabulary> {
    Vocabulary::new(
        WORDS.iter().map(|w| w.to_string()).collect(),
        languages(),
        FAREWELLS.iter().map(|f| f.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_vocabulary_is_valid() {
        let vocabulary = builtin_vocabulary().unwrap();
        assert_eq!(vocabulary.escalation().unwrap().max_wrong_guesses(), 8);
        assert!(FAREWELLS.iter().all(|f| f.contains("{}")));
    }

    #[test]
    fn words_fit_the_status_buffer() {
        let max = guess_engine::GameConfig::default().max_word_letters;
        assert!(WORDS.iter().all(|w| w.len() <= max));
    }
}
