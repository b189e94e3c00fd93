pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{SoundEvent, GameEvent};
pub use assets::vocabulary::{Language, Vocabulary};
pub use bridge::protocol::{ProtocolLayout, StatusBuffer};
pub use core::countdown::{CountdownTimer, TickOutcome, TimerPhase};
pub use core::escalation::EscalationList;
pub use core::guess::{
    GameState, GuessOutcome, GuessStatus, GuessedLetters, KeyState, RevealedLetter,
};
pub use core::rng::Rng;
pub use core::scheduler::{IntervalScheduler, Scheduler, TaskId, MAX_CATCH_UP};
pub use input::queue::{InputEvent, InputQueue};
pub use error::EngineError;
