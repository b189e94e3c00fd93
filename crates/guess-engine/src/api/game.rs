use crate::api::types::{SoundEvent, GameEvent};
use crate::assets::vocabulary::Vocabulary;
use crate::bridge::protocol::StatusBuffer;
use crate::core::rng::Rng;
use crate::core::scheduler::{IntervalScheduler, TaskId};
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Countdown length in seconds (default: 120).
    pub initial_time_secs: u32,
    /// Countdown tick interval in milliseconds (default: 1000).
    pub tick_interval_ms: u32,
    /// RNG seed. The web runner replaces it with the page clock.
    pub seed: u64,
    /// Longest secret word the status buffer can carry (default: 32).
    pub max_word_letters: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time_secs: 120,
            tick_interval_ms: 1000,
            seed: 42,
            max_word_letters: 32,
            max_events: 32,
            max_sounds: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame update: consume queued input, apply game rules.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// A scheduled task fired. Only tasks still active when delivered reach here.
    fn on_task(&mut self, _ctx: &mut EngineContext, _task: TaskId) {}

    /// Replace the game's word data at runtime.
    fn load_vocabulary(&mut self, _ctx: &mut EngineContext, _vocabulary: Vocabulary) {}

    /// Read-only pass that publishes state for the TypeScript view.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to the `Game` hooks.
pub struct EngineContext {
    pub scheduler: IntervalScheduler,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(GameConfig::default().seed)
    }

    /// Create an EngineContext with a specific RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scheduler: IntervalScheduler::new(),
            rng: Rng::new(seed),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Emit a sound event to be forwarded to TypeScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    /// Flat numeric status read by TypeScript every frame.
    pub status: &'a mut StatusBuffer,
    /// JSON snapshot for text and structured view data.
    pub snapshot: &'a mut String,
}
