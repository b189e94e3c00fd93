use guess_engine::*;
use guess_engine::error::Result;
use guess_engine::input::queue::{index_to_letter, key_code_to_letter};
use guess_engine::systems::status::build_status;
use guess_engine::systems::text::{
    attempts_label, clock_label, guess_announcement, masked_word, word_announcement,
};

use crate::farewell::builtin_vocabulary;
use crate::snapshot::{headline, GameSnapshot, KeySnapshot, LanguageChip};

// Game event kinds (Rust → React)
pub const EVENT_NEW_GAME: f32 = 1.0;
pub const EVENT_CORRECT_GUESS: f32 = 2.0;
pub const EVENT_WRONG_GUESS: f32 = 3.0;
pub const EVENT_TICK: f32 = 4.0;
pub const EVENT_TIME_UP: f32 = 5.0;
pub const EVENT_WON: f32 = 6.0;
pub const EVENT_LOST: f32 = 7.0;

// Custom event kinds (React → Rust)
pub const CUSTOM_GUESS: u32 = 1;
pub const CUSTOM_NEW_GAME: u32 = 2;
pub const CUSTOM_START_TIMER: u32 = 3;
pub const CUSTOM_STOP_TIMER: u32 = 4;
pub const CUSTOM_RESET_TIMER: u32 = 5;

// Sound ids, mapped in the TypeScript SoundManager
pub const SOUND_CORRECT: SoundEvent = SoundEvent(1);
pub const SOUND_WRONG: SoundEvent = SoundEvent(2);
pub const SOUND_WIN: SoundEvent = SoundEvent(3);
pub const SOUND_LOSE: SoundEvent = SoundEvent(4);

pub struct AssemblyEndgame {
    config: GameConfig,
    vocabulary: Vocabulary,
    escalation: EscalationList<Language>,
    state: GameState,
    timer: CountdownTimer,
    farewell: String,
    /// Win/loss already announced for the current game.
    finished: bool,
}

impl AssemblyEndgame {
    /// Game with the bundled vocabulary.
    ///
    /// # Panics
    /// If the bundled vocabulary is invalid (checked by the crate's tests).
    pub fn new() -> Self {
        Self::with_vocabulary(builtin_vocabulary().expect("bundled vocabulary is valid"))
            .expect("bundled vocabulary is valid")
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Result<Self> {
        vocabulary.validate()?;
        let config = GameConfig::default();
        let escalation = vocabulary.escalation()?;
        let state = GameState::new(vocabulary.words[0].clone(), escalation.max_wrong_guesses())?;
        let timer = CountdownTimer::new(config.initial_time_secs, config.tick_interval_ms);
        Ok(Self {
            config,
            vocabulary,
            escalation,
            state,
            timer,
            farewell: String::new(),
            finished: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn status(&self) -> GuessStatus {
        self.state.status(self.timer.time_left())
    }

    /// Farewell line, shown only while playing after a wrong guess.
    pub fn visible_farewell(&self) -> Option<&str> {
        let status = self.status();
        (!status.is_over && status.is_last_guess_wrong).then_some(self.farewell.as_str())
    }

    /// Fresh word, empty guesses, timer back to idle.
    pub fn new_game(&mut self, ctx: &mut EngineContext) {
        let word = self.vocabulary.pick_word(&mut ctx.rng).to_string();
        match GameState::new(word, self.escalation.max_wrong_guesses()) {
            Ok(state) => self.state = state,
            Err(err) => {
                log::error!("new game: {err}");
                return;
            }
        }
        self.timer.reset(&mut ctx.scheduler);
        self.farewell = self.farewell_for(0, ctx);
        self.finished = false;
        ctx.emit_event(GameEvent::new(EVENT_NEW_GAME, self.state.secret_word().len() as f32));
        log::info!("new game: {} letters", self.state.secret_word().len());
    }

    fn farewell_for(&self, wrong_index: usize, ctx: &mut EngineContext) -> String {
        let language = self.escalation.entry(wrong_index);
        self.vocabulary.farewell_text(&language.name, &mut ctx.rng)
    }

    fn guess(&mut self, ctx: &mut EngineContext, letter: char) {
        if self.status().is_over {
            return;
        }
        if !self.timer.is_running() {
            self.timer.start(&mut ctx.scheduler);
        }

        match self.state.guess_letter(letter, self.timer.time_left()) {
            GuessOutcome::Correct => {
                ctx.emit_sound(SOUND_CORRECT);
                ctx.emit_event(GameEvent::new(EVENT_CORRECT_GUESS, letter as u32 as f32));
            }
            GuessOutcome::Wrong { wrong_index } => {
                self.farewell = self.farewell_for(wrong_index, ctx);
                ctx.emit_sound(SOUND_WRONG);
                ctx.emit_event(GameEvent {
                    kind: EVENT_WRONG_GUESS,
                    a: letter as u32 as f32,
                    b: wrong_index as f32,
                    c: 0.0,
                });
            }
            GuessOutcome::Rejected | GuessOutcome::Repeated => {}
        }
        self.settle(ctx);
    }

    /// Stop the clock and announce the result once the game is over.
    fn settle(&mut self, ctx: &mut EngineContext) {
        let status = self.status();
        if !status.is_over {
            return;
        }
        if self.timer.is_running() {
            self.timer.stop(&mut ctx.scheduler);
        }
        if self.finished {
            return;
        }
        self.finished = true;
        if status.is_won {
            ctx.emit_sound(SOUND_WIN);
            ctx.emit_event(GameEvent::new(EVENT_WON, status.guesses_remaining as f32));
            log::info!("game won with {} attempts left", status.guesses_remaining);
        } else {
            ctx.emit_sound(SOUND_LOSE);
            ctx.emit_event(GameEvent::new(EVENT_LOST, status.wrong_guess_count as f32));
            log::info!("game lost after {} wrong guesses", status.wrong_guess_count);
        }
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32) {
        match kind {
            CUSTOM_GUESS => {
                if a >= 0.0 {
                    if let Some(letter) = index_to_letter(a as u32) {
                        self.guess(ctx, letter);
                    }
                }
            }
            CUSTOM_NEW_GAME => self.new_game(ctx),
            CUSTOM_START_TIMER => {
                if !self.status().is_over {
                    self.timer.start(&mut ctx.scheduler);
                }
            }
            CUSTOM_STOP_TIMER => self.timer.stop(&mut ctx.scheduler),
            CUSTOM_RESET_TIMER => {
                self.timer.reset(&mut ctx.scheduler);
                // Restored time may reopen a game lost on time
                self.finished = self.status().is_over;
            }
            _ => log::debug!("unknown custom event {kind}"),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        let time_left = self.timer.time_left();
        let status = self.status();
        let word = self.state.letter_reveals(time_left);

        GameSnapshot {
            masked_word: masked_word(&word),
            word,
            guessed_letters: self.state.guessed_letters(),
            keys: ('a'..='z')
                .map(|letter| KeySnapshot {
                    letter,
                    state: self.state.key_state(letter),
                    enabled: self.state.is_key_enabled(letter, time_left),
                })
                .collect(),
            status,
            farewell: self.visible_farewell(),
            headline: headline(&status),
            attempts_label: attempts_label(&status),
            languages: self
                .escalation
                .lost_entries(status.wrong_guess_count)
                .map(|(language, lost)| LanguageChip {
                    name: &language.name,
                    background_color: &language.background_color,
                    color: &language.color,
                    lost,
                })
                .collect(),
            time_left,
            clock_label: clock_label(time_left),
            is_running: self.timer.is_running(),
            announcement: guess_announcement(&self.state, time_left),
            word_announcement: word_announcement(&self.state),
        }
    }
}

impl Default for AssemblyEndgame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for AssemblyEndgame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.new_game(ctx);
        log::info!("Assembly: Endgame initialized");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if let Some(letter) = key_code_to_letter(key_code) {
                        self.guess(ctx, letter);
                    }
                }
                InputEvent::Custom { kind, a, .. } => self.handle_custom(ctx, kind, a),
            }
        }
    }

    fn on_task(&mut self, ctx: &mut EngineContext, task: TaskId) {
        match self.timer.on_tick(task, &mut ctx.scheduler) {
            TickOutcome::Ticked { time_left } => {
                ctx.emit_event(GameEvent::new(EVENT_TICK, time_left as f32));
            }
            TickOutcome::Expired => {
                ctx.emit_event(GameEvent::new(EVENT_TICK, 0.0));
                ctx.emit_event(GameEvent::new(EVENT_TIME_UP, 0.0));
                self.settle(ctx);
            }
            TickOutcome::Ignored => {}
        }
    }

    fn load_vocabulary(&mut self, ctx: &mut EngineContext, vocabulary: Vocabulary) {
        let escalation = match vocabulary.validate().and_then(|()| vocabulary.escalation()) {
            Ok(escalation) => escalation,
            Err(err) => {
                log::error!("vocabulary rejected: {err}");
                return;
            }
        };
        log::info!(
            "vocabulary loaded: {} words, {} languages",
            vocabulary.words.len(),
            escalation.len()
        );
        self.vocabulary = vocabulary;
        self.escalation = escalation;
        self.new_game(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        build_status(&self.state, &self.timer, ctx.status);
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => *ctx.snapshot = json,
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }
    }
}
