use serde::Serialize;

use guess_engine::{GuessStatus, KeyState, RevealedLetter};

/// Everything the React view renders, serialized once per frame.
/// The secret word is only exposed through `word` (reveal policy applied).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot<'a> {
    pub word: Vec<RevealedLetter>,
    pub masked_word: String,
    pub guessed_letters: &'a [char],
    pub keys: Vec<KeySnapshot>,
    pub status: GuessStatus,
    /// Shown only while the game is running and the last guess was wrong.
    pub farewell: Option<&'a str>,
    pub headline: Option<Headline>,
    pub attempts_label: String,
    pub languages: Vec<LanguageChip<'a>>,
    pub time_left: u32,
    pub clock_label: String,
    pub is_running: bool,
    pub announcement: Option<String>,
    pub word_announcement: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySnapshot {
    pub letter: char,
    pub state: KeyState,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChip<'a> {
    pub name: &'a str,
    pub background_color: &'a str,
    pub color: &'a str,
    pub lost: bool,
}

/// End-of-game banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub title: &'static str,
    pub message: &'static str,
}

pub const WIN_HEADLINE: Headline = Headline {
    title: "You win!",
    message: "Well done! 🎉",
};

pub const LOSS_HEADLINE: Headline = Headline {
    title: "Game over!",
    message: "You lose! Better start learning Assembly 😭",
};

/// Banner for a finished game; `None` while playing.
pub fn headline(status: &GuessStatus) -> Option<Headline> {
    if status.is_won {
        Some(WIN_HEADLINE)
    } else if status.is_lost {
        Some(LOSS_HEADLINE)
    } else {
        None
    }
}
