//! Text helpers for the view layer.
//!
//! Pure functions: clock formatting, masked word patterns and the
//! screen-reader announcements the page puts in its live region.

use crate::core::guess::{GameState, GuessStatus, RevealedLetter};

/// Label shown instead of the clock once time has run out.
pub const TIME_UP_LABEL: &str = "Time's Up!";

/// Format whole seconds as `m:ss` (e.g., 65 -> "1:05").
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Clock text: "Time's Up!" at zero, `m:ss` otherwise.
pub fn clock_label(time_left: u32) -> String {
    if time_left == 0 {
        TIME_UP_LABEL.to_string()
    } else {
        format_time(time_left)
    }
}

/// Word pattern with `_` for hidden letters (e.g., "rea__").
pub fn masked_word(reveals: &[RevealedLetter]) -> String {
    reveals.iter().map(|r| r.letter.unwrap_or('_')).collect()
}

/// Remaining-attempts line under the word.
pub fn attempts_label(status: &GuessStatus) -> String {
    if status.is_won {
        format!("You guessed the word with {} attempts left.", status.guesses_remaining)
    } else {
        format!("You have {} attempts left.", status.guesses_remaining)
    }
}

/// Live-region text about the last guess. `None` before the first guess.
pub fn guess_announcement(state: &GameState, time_left: u32) -> Option<String> {
    let letter = state.last_guess()?;
    let status = state.status(time_left);
    let verdict = if status.is_last_guess_wrong {
        format!("Sorry, the letter {letter} is not in the word.")
    } else {
        format!("Correct! The letter {letter} is in the word.")
    };
    Some(format!("{verdict} You have {} attempts left.", status.guesses_remaining))
}

/// Live-region spelling of the word: guessed letters, "blank" otherwise.
pub fn word_announcement(state: &GameState) -> String {
    let spelled: Vec<String> = state
        .secret_word()
        .chars()
        .map(|c| {
            if state.guessed_letters().contains(&c) {
                format!("{c}.")
            } else {
                "blank.".to_string()
            }
        })
        .collect();
    format!("Current word: {}", spelled.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(120), "2:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn clock_label_at_zero() {
        assert_eq!(clock_label(0), TIME_UP_LABEL);
        assert_eq!(clock_label(61), "1:01");
    }

    #[test]
    fn masked_word_pattern() {
        let mut state = GameState::new("react", 8).unwrap();
        for c in ['r', 'e', 'a'] {
            state.guess_letter(c, 120);
        }
        assert_eq!(masked_word(&state.letter_reveals(120)), "rea__");
    }

    #[test]
    fn announcements() {
        let mut state = GameState::new("rust", 8).unwrap();
        assert_eq!(guess_announcement(&state, 120), None);

        state.guess_letter('r', 120);
        assert_eq!(
            guess_announcement(&state, 120).unwrap(),
            "Correct! The letter r is in the word. You have 8 attempts left."
        );

        state.guess_letter('z', 120);
        assert_eq!(
            guess_announcement(&state, 120).unwrap(),
            "Sorry, the letter z is not in the word. You have 7 attempts left."
        );
        assert_eq!(word_announcement(&state), "Current word: r. blank. blank. blank.");
    }

    #[test]
    fn attempts_label_after_win() {
        let mut state = GameState::new("go", 8).unwrap();
        state.guess_letter('x', 120);
        state.guess_letter('g', 120);
        state.guess_letter('o', 120);
        assert_eq!(
            attempts_label(&state.status(120)),
            "You guessed the word with 7 attempts left."
        );
    }
}
