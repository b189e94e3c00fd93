//! Status buffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Word: max_word_letters floats]   0 = hidden, +code = revealed, -code = missed
//! [Keys: 26 floats]                 0 = unused, 1 = correct, 2 = wrong
//! [Events: max_events × 4 floats]
//! [Sounds: max_sounds × 1 float]
//! ```
//!
//! Capacities are written into the header every frame.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, SoundEvent};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_TIME_LEFT: usize = 2;
pub const HEADER_INITIAL_TIME: usize = 3;
pub const HEADER_TIMER_PHASE: usize = 4;
pub const HEADER_WRONG_GUESS_COUNT: usize = 5;
pub const HEADER_GUESSES_REMAINING: usize = 6;
pub const HEADER_MAX_WRONG_GUESSES: usize = 7;
pub const HEADER_FLAGS: usize = 8;
pub const HEADER_LAST_GUESS: usize = 9;
pub const HEADER_WORD_LENGTH: usize = 10;
pub const HEADER_GUESSED_COUNT: usize = 11;
pub const HEADER_MAX_WORD_LETTERS: usize = 12;
pub const HEADER_MAX_EVENTS: usize = 13;
pub const HEADER_EVENT_COUNT: usize = 14;
pub const HEADER_SOUND_COUNT: usize = 15;

/// Bits of `HEADER_FLAGS`.
pub const FLAG_WON: u32 = 1;
pub const FLAG_LOST: u32 = 1 << 1;
pub const FLAG_OVER: u32 = 1 << 2;
pub const FLAG_LAST_GUESS_WRONG: u32 = 1 << 3;
pub const FLAG_TIME_EXPIRED: u32 = 1 << 4;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Keyboard keys `a..=z` (fixed wire format).
pub const KEY_COUNT: usize = 26;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Longest word the word section can hold.
    pub max_word_letters: usize,
    /// Maximum game events per frame.
    pub max_events: usize,
    /// Maximum sound events per frame.
    pub max_sounds: usize,

    /// Offset (in floats) where word data begins.
    pub word_data_offset: usize,
    /// Offset (in floats) where key data begins.
    pub key_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_word_letters: usize, max_events: usize, max_sounds: usize) -> Self {
        let word_data_offset = HEADER_FLOATS;
        let key_data_offset = word_data_offset + max_word_letters;
        let event_data_offset = key_data_offset + KEY_COUNT;
        let sound_data_offset = event_data_offset + max_events * EVENT_FLOATS;
        let buffer_total_floats = sound_data_offset + max_sounds;

        Self {
            max_word_letters,
            max_events,
            max_sounds,
            word_data_offset,
            key_data_offset,
            event_data_offset,
            sound_data_offset,
            buffer_total_floats,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_word_letters, config.max_events, config.max_sounds)
    }
}

/// Flat f32 buffer TypeScript reads through a pointer into WASM memory.
#[derive(Debug, Clone)]
pub struct StatusBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame: u32,
}

impl StatusBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self { layout, data, frame: 0 }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Zero the buffer and stamp the header for a new frame.
    pub fn begin_frame(&mut self) {
        self.data.fill(0.0);
        self.frame = self.frame.wrapping_add(1);
        self.data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        self.data[HEADER_FRAME_COUNTER] = self.frame as f32;
        self.data[HEADER_MAX_WORD_LETTERS] = self.layout.max_word_letters as f32;
        self.data[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
    }

    /// Write a header field. Out-of-range indices are ignored.
    pub fn set_header(&mut self, field: usize, value: f32) {
        if field < HEADER_FLOATS {
            self.data[field] = value;
        }
    }

    pub fn header(&self, field: usize) -> f32 {
        self.data.get(field).copied().unwrap_or(0.0)
    }

    /// Write the word section. Letters past capacity are dropped.
    pub fn write_word(&mut self, cells: impl IntoIterator<Item = f32>) {
        let start = self.layout.word_data_offset;
        for (slot, value) in self.data[start..start + self.layout.max_word_letters]
            .iter_mut()
            .zip(cells)
        {
            *slot = value;
        }
    }

    /// Write the key section (26 entries, `a..=z`).
    pub fn write_keys(&mut self, keys: impl IntoIterator<Item = f32>) {
        let start = self.layout.key_data_offset;
        for (slot, value) in self.data[start..start + KEY_COUNT].iter_mut().zip(keys) {
            *slot = value;
        }
    }

    /// Copy this frame's events. Extras beyond capacity are dropped.
    pub fn write_events(&mut self, events: &[GameEvent]) {
        let count = events.len().min(self.layout.max_events);
        let start = self.layout.event_data_offset;
        for (i, event) in events[..count].iter().enumerate() {
            let at = start + i * EVENT_FLOATS;
            self.data[at..at + EVENT_FLOATS].copy_from_slice(event.as_floats());
        }
        self.data[HEADER_EVENT_COUNT] = count as f32;
    }

    /// Copy this frame's sound ids. Extras beyond capacity are dropped.
    pub fn write_sounds(&mut self, sounds: &[SoundEvent]) {
        let count = sounds.len().min(self.layout.max_sounds);
        let start = self.layout.sound_data_offset;
        for (i, sound) in sounds[..count].iter().enumerate() {
            self.data[start + i] = sound.0 as f32;
        }
        self.data[HEADER_SOUND_COUNT] = count as f32;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
