use guess_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, ProtocolLayout, Scheduler, StatusBuffer, Vocabulary,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    status: StatusBuffer,
    snapshot: String,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_seed(game, config.seed)
    }

    /// Create a runner whose RNG is seeded with `seed` instead of the config seed.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let status = StatusBuffer::new(ProtocolLayout::from_config(&config));

        Self {
            game,
            ctx: EngineContext::with_seed(seed),
            input: InputQueue::new(),
            status,
            snapshot: String::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: advance scheduled tasks by `dt` seconds, apply input,
    /// then publish status for the view.
    ///
    /// Tasks scheduled by this frame's input start counting from the next
    /// frame; the time already elapsed is never charged to them.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let fired = self.ctx.scheduler.advance(dt as f64 * 1000.0);
        for task in fired {
            // An earlier task in this batch may have cancelled this one
            if self.ctx.scheduler.is_active(task) {
                self.game.on_task(&mut self.ctx, task);
            }
        }

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.publish();
    }

    /// Parse vocabulary JSON and hand it to the game. Invalid data is logged
    /// and ignored.
    pub fn load_vocabulary(&mut self, json: &str) {
        match Vocabulary::from_json(json) {
            Ok(vocabulary) => {
                self.ctx.clear_frame_data();
                self.game.load_vocabulary(&mut self.ctx, vocabulary);
                self.publish();
            }
            Err(err) => log::error!("vocabulary rejected: {err}"),
        }
    }

    fn publish(&mut self) {
        self.status.begin_frame();
        {
            let mut render_ctx = RenderContext {
                status: &mut self.status,
                snapshot: &mut self.snapshot,
            };
            self.game.render(&mut render_ctx);
        }
        self.status.write_events(&self.ctx.events);
        self.status.write_sounds(&self.ctx.sounds);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Accessors read by TypeScript via wasm_bindgen exports ----

    pub fn status_ptr(&self) -> *const f32 {
        self.status.ptr()
    }

    pub fn status_len(&self) -> u32 {
        self.status.len() as u32
    }

    pub fn status(&self) -> &StatusBuffer {
        &self.status
    }

    pub fn snapshot_json(&self) -> String {
        self.snapshot.clone()
    }

    pub fn initial_time(&self) -> u32 {
        self.config.initial_time_secs
    }
}
