use crate::bridge::protocol::{
    StatusBuffer, FLAG_LAST_GUESS_WRONG, FLAG_LOST, FLAG_OVER, FLAG_TIME_EXPIRED, FLAG_WON,
    HEADER_FLAGS, HEADER_GUESSED_COUNT, HEADER_GUESSES_REMAINING, HEADER_INITIAL_TIME,
    HEADER_LAST_GUESS, HEADER_MAX_WRONG_GUESSES, HEADER_TIMER_PHASE, HEADER_TIME_LEFT,
    HEADER_WORD_LENGTH, HEADER_WRONG_GUESS_COUNT,
};
use crate::core::countdown::{CountdownTimer, TimerPhase};
use crate::core::guess::{GameState, GuessStatus, KeyState};

/// Pack status flags into the `HEADER_FLAGS` bitfield.
pub fn status_flags(status: &GuessStatus) -> u32 {
    let mut flags = 0;
    if status.is_won {
        flags |= FLAG_WON;
    }
    if status.is_lost {
        flags |= FLAG_LOST;
    }
    if status.is_over {
        flags |= FLAG_OVER;
    }
    if status.is_last_guess_wrong {
        flags |= FLAG_LAST_GUESS_WRONG;
    }
    if status.time_expired {
        flags |= FLAG_TIME_EXPIRED;
    }
    flags
}

fn phase_code(phase: TimerPhase) -> f32 {
    match phase {
        TimerPhase::Idle => 0.0,
        TimerPhase::Running => 1.0,
        TimerPhase::Stopped => 2.0,
        TimerPhase::Expired => 3.0,
    }
}

fn key_code(state: KeyState) -> f32 {
    match state {
        KeyState::Unused => 0.0,
        KeyState::Correct => 1.0,
        KeyState::Wrong => 2.0,
    }
}

/// Write game and timer state into the status buffer.
/// Call after `StatusBuffer::begin_frame`.
pub fn build_status(state: &GameState, timer: &CountdownTimer, buffer: &mut StatusBuffer) {
    let time_left = timer.time_left();
    let status = state.status(time_left);

    buffer.set_header(HEADER_TIME_LEFT, time_left as f32);
    buffer.set_header(HEADER_INITIAL_TIME, timer.initial_time() as f32);
    buffer.set_header(HEADER_TIMER_PHASE, phase_code(timer.phase()));
    buffer.set_header(HEADER_WRONG_GUESS_COUNT, status.wrong_guess_count as f32);
    buffer.set_header(HEADER_GUESSES_REMAINING, status.guesses_remaining as f32);
    buffer.set_header(HEADER_MAX_WRONG_GUESSES, state.max_wrong_guesses() as f32);
    buffer.set_header(HEADER_FLAGS, status_flags(&status) as f32);
    buffer.set_header(
        HEADER_LAST_GUESS,
        status.last_guess.map_or(0.0, |c| c as u32 as f32),
    );
    buffer.set_header(HEADER_WORD_LENGTH, state.secret_word().len() as f32);
    buffer.set_header(HEADER_GUESSED_COUNT, state.guessed_letters().len() as f32);

    buffer.write_word(state.letter_reveals(time_left).iter().map(|r| match r.letter {
        None => 0.0,
        Some(c) if r.missed => -(c as u32 as f32),
        Some(c) => c as u32 as f32,
    }));
    buffer.write_keys(('a'..='z').map(|c| key_code(state.key_state(c))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::bridge::protocol::{ProtocolLayout, HEADER_PROTOCOL_VERSION};

    fn buffer() -> StatusBuffer {
        let mut buf = StatusBuffer::new(ProtocolLayout::from_config(&GameConfig::default()));
        buf.begin_frame();
        buf
    }

    #[test]
    fn writes_header_and_word() {
        let mut state = GameState::new("react", 8).unwrap();
        state.guess_letter('r', 120);
        state.guess_letter('z', 120);
        let timer = CountdownTimer::new(120, 1000);
        let mut buf = buffer();
        build_status(&state, &timer, &mut buf);

        assert_eq!(buf.header(HEADER_PROTOCOL_VERSION), 1.0);
        assert_eq!(buf.header(HEADER_TIME_LEFT), 120.0);
        assert_eq!(buf.header(HEADER_WRONG_GUESS_COUNT), 1.0);
        assert_eq!(buf.header(HEADER_GUESSES_REMAINING), 7.0);
        assert_eq!(buf.header(HEADER_LAST_GUESS), 'z' as u32 as f32);
        assert_eq!(buf.header(HEADER_FLAGS), FLAG_LAST_GUESS_WRONG as f32);
        assert_eq!(buf.header(HEADER_WORD_LENGTH), 5.0);

        let layout = buf.layout().clone();
        let word = &buf.as_slice()[layout.word_data_offset..layout.word_data_offset + 5];
        assert_eq!(word, &['r' as u32 as f32, 0.0, 0.0, 0.0, 0.0]);
        let keys = &buf.as_slice()[layout.key_data_offset..layout.key_data_offset + 26];
        assert_eq!(keys[('r' as u8 - b'a') as usize], 1.0);
        assert_eq!(keys[25], 2.0);
    }

    #[test]
    fn lost_game_marks_missed_letters_negative() {
        let state = GameState::new("ab", 8).unwrap();
        let mut s = crate::core::scheduler::IntervalScheduler::new();
        let mut timer = CountdownTimer::new(1, 1000);
        timer.start(&mut s);
        for task in s.advance(1000.0) {
            timer.on_tick(task, &mut s);
        }
        let mut buf = buffer();
        build_status(&state, &timer, &mut buf);

        let flags = buf.header(HEADER_FLAGS) as u32;
        assert_eq!(flags, FLAG_LOST | FLAG_OVER | FLAG_TIME_EXPIRED);
        assert_eq!(buf.header(HEADER_TIMER_PHASE), 3.0);
        let at = buf.layout().word_data_offset;
        assert_eq!(buf.as_slice()[at], -('a' as u32 as f32));
    }
}
