/// Input event types the engine understands.
/// Generic: no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A physical key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A custom event from the UI layer (React buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a DOM key code (65..=90) to a lowercase letter.
pub fn key_code_to_letter(key_code: u32) -> Option<char> {
    match key_code {
        65..=90 => char::from_u32(key_code + 32),
        _ => None,
    }
}

/// Map an alphabet index (0 = 'a') to a letter.
pub fn index_to_letter(index: u32) -> Option<char> {
    if index < 26 {
        char::from_u32('a' as u32 + index)
    } else {
        None
    }
}
