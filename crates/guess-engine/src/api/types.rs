use bytemuck::{Pod, Zeroable};

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined sound in the TypeScript SoundManager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event communicated from Rust to TypeScript through the status buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Event with a single payload value.
    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }

    /// The event as its four wire floats.
    pub fn as_floats(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_wire_layout() {
        let e = GameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 };
        assert_eq!(e.as_floats(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
