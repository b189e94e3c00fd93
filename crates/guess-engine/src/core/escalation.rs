use crate::error::{EngineError, Result};

/// Ordered, non-empty list of feedback entries. One entry is consumed per
/// wrong guess; the last one is never reached before the game is lost.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationList<T> {
    entries: Vec<T>,
}

impl<T> EscalationList<T> {
    pub fn new(entries: Vec<T>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::EmptyEscalation);
        }
        Ok(Self { entries })
    }

    /// Wrong guesses allowed before the game is lost: `len - 1`.
    pub fn max_wrong_guesses(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry selected by the wrong guess that was made after `wrong_index`
    /// earlier wrong guesses. Clamped to the last entry.
    pub fn entry(&self, wrong_index: usize) -> &T {
        let idx = wrong_index.min(self.entries.len() - 1);
        &self.entries[idx]
    }

    /// Entries paired with whether they have been eliminated after
    /// `wrong_count` wrong guesses.
    pub fn lost_entries(&self, wrong_count: usize) -> impl Iterator<Item = (&T, bool)> {
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, e)| (e, i < wrong_count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
