/// Browser `keyCode` values the orrery reacts to.
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// Input event types the orrery understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// Pointer moved by (dx, dy) screen pixels; y grows downward.
    PointerMove { dx: f32, dy: f32 },
    /// Scroll wheel steps; positive zooms in.
    Scroll { dy: f32 },
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

    /// Iterate over pending events without consuming them.
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

/// Keys currently held, for polled movement.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: Vec<u32>,
}

impl KeyState {
    /// Apply a key event; other events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } if !self.held.contains(&key_code) => {
                self.held.push(key_code);
            }
            InputEvent::KeyUp { key_code } => self.held.retain(|&k| k != key_code),
            _ => {}
        }
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
