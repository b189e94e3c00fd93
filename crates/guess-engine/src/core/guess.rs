// core/guess.rs
//
// Word-guessing rules. Only the secret word and the guessed letters are
// stored; every outcome flag is recomputed by `GuessStatus::derive`.

use serde::Serialize;

use crate::error::{EngineError, Result};

/// Append-only ordered set of guessed letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<char>,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(26),
        }
    }

    /// Append `letter` unless already present. Returns whether it was added.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Most recent guess.
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// Letters in guess order.
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

/// Derived outcome record. Never stored; see [`GuessStatus::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessStatus {
    pub wrong_guess_count: usize,
    pub guesses_remaining: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub is_over: bool,
    pub last_guess: Option<char>,
    pub is_last_guess_wrong: bool,
    pub time_expired: bool,
}

impl GuessStatus {
    /// Compute every outcome flag from the stored inputs.
    ///
    /// Win is evaluated first: a completed word is a win even if the timer
    /// reached zero. Otherwise the game is lost once the wrong-guess budget
    /// is used up or time has run out.
    pub fn derive(secret: &str, guessed: &[char], max_wrong_guesses: usize, time_left: u32) -> Self {
        let wrong_guess_count = guessed.iter().filter(|c| !secret.contains(**c)).count();
        let is_won = secret.chars().all(|c| guessed.contains(&c));
        let time_expired = time_left == 0;
        let is_lost = !is_won && (wrong_guess_count >= max_wrong_guesses || time_expired);
        let last_guess = guessed.last().copied();

        Self {
            wrong_guess_count,
            guesses_remaining: max_wrong_guesses.saturating_sub(wrong_guess_count),
            is_won,
            is_lost,
            is_over: is_won || is_lost,
            last_guess,
            is_last_guess_wrong: last_guess.is_some_and(|c| !secret.contains(c)),
            time_expired,
        }
    }
}

/// What a call to [`GameState::guess_letter`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game already over; nothing changed.
    Rejected,
    /// Letter was guessed before; nothing changed.
    Repeated,
    /// Letter is in the word.
    Correct,
    /// Letter is not in the word. `wrong_index` counts the wrong guesses
    /// made before this one.
    Wrong { wrong_index: usize },
}

/// Keyboard key state for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// One position of the secret word as the player may see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealedLetter {
    /// The letter, if it may be shown.
    pub letter: Option<char>,
    /// Shown only because the game was lost.
    pub missed: bool,
}

impl RevealedLetter {
    pub fn is_revealed(&self) -> bool {
        self.letter.is_some()
    }
}

/// Secret word plus guesses for a single game.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: String,
    guessed: GuessedLetters,
    max_wrong_guesses: usize,
}

impl GameState {
    /// Start a game. The secret must be non-empty and all `a..=z`.
    pub fn new(secret: impl Into<String>, max_wrong_guesses: usize) -> Result<Self> {
        let secret = secret.into();
        validate_secret(&secret)?;
        Ok(Self {
            secret,
            guessed: GuessedLetters::new(),
            max_wrong_guesses,
        })
    }

    /// Replace the secret word and forget all guesses.
    pub fn reset(&mut self, secret: impl Into<String>) -> Result<()> {
        let secret = secret.into();
        validate_secret(&secret)?;
        self.secret = secret;
        self.guessed.clear();
        Ok(())
    }

    /// Record a guess. No-op once the game is over or for a repeated letter.
    /// `time_left` is the countdown's remaining seconds.
    pub fn guess_letter(&mut self, letter: char, time_left: u32) -> GuessOutcome {
        let before = self.status(time_left);
        if before.is_over {
            return GuessOutcome::Rejected;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }
        if self.secret.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong {
                wrong_index: before.wrong_guess_count,
            }
        }
    }

    pub fn status(&self, time_left: u32) -> GuessStatus {
        GuessStatus::derive(&self.secret, self.guessed.as_slice(), self.max_wrong_guesses, time_left)
    }

    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    pub fn guessed_letters(&self) -> &[char] {
        self.guessed.as_slice()
    }

    pub fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .as_slice()
            .iter()
            .filter(|c| !self.secret.contains(**c))
            .count()
    }

    pub fn guesses_remaining(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guess_count())
    }

    pub fn is_won(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(c))
    }

    pub fn last_guess(&self) -> Option<char> {
        self.guessed.last()
    }

    pub fn is_last_guess_wrong(&self) -> bool {
        self.last_guess().is_some_and(|c| !self.secret.contains(c))
    }

    /// Per-position view of the secret. Guessed letters are shown; once the
    /// game is lost the rest are shown too, flagged as missed.
    pub fn letter_reveals(&self, time_left: u32) -> Vec<RevealedLetter> {
        let lost = self.status(time_left).is_lost;
        self.secret
            .chars()
            .map(|c| {
                let guessed = self.guessed.contains(c);
                RevealedLetter {
                    letter: (guessed || lost).then_some(c),
                    missed: lost && !guessed,
                }
            })
            .collect()
    }

    pub fn key_state(&self, letter: char) -> KeyState {
        if !self.guessed.contains(letter) {
            KeyState::Unused
        } else if self.secret.contains(letter) {
            KeyState::Correct
        } else {
            KeyState::Wrong
        }
    }

    /// Whether the on-screen key for `letter` accepts input.
    pub fn is_key_enabled(&self, letter: char, time_left: u32) -> bool {
        !self.guessed.contains(letter) && !self.status(time_left).is_over
    }
}

fn validate_secret(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(EngineError::EmptySecretWord);
    }
    if !secret.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(EngineError::InvalidSecretWord {
            word: secret.to_string(),
        });
    }
    Ok(())
}
