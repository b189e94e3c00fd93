pub mod runner;

pub use runner::GameRunner;

/// Seed for the game RNG taken from the page clock, so each page load
/// draws a different sequence of words.
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Log to the browser console directly, bypassing the `log` facade.
/// Used before the logger is installed.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, status accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use guess_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// guess_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `guess_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            if console_log::init_with_level(log::Level::Info).is_err() {
                $crate::console_warn("logger already installed");
            }

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::with_seed(game, $crate::clock_seed());

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_vocabulary(json: &str) {
            with_runner(|r| r.load_vocabulary(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_status_ptr() -> *const f32 {
            with_runner(|r| r.status_ptr())
        }

        #[wasm_bindgen]
        pub fn get_status_len() -> u32 {
            with_runner(|r| r.status_len())
        }

        #[wasm_bindgen]
        pub fn get_snapshot_json() -> String {
            with_runner(|r| r.snapshot_json())
        }

        #[wasm_bindgen]
        pub fn get_initial_time() -> u32 {
            with_runner(|r| r.initial_time())
        }
    };
}
