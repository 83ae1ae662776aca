//! Pointer input snapshot
//!
//! Hosts translate their native touch/mouse events into [`PointerEvent`]s.
//! The simulation only reads the last pointer position and whether the
//! screen was touched since the flag was last consumed.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    /// Gesture aborted by the host; handled like `Up`
    Cancel { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Last known pointer position in surface pixels
    pub pointer: Vec2,
    /// Set by a pointer press, cleared when a state transition consumes it
    pub touched: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event moves the pointer; presses also raise `touched`
    pub fn apply(&mut self, event: PointerEvent) {
        let (x, y) = match event {
            PointerEvent::Down { x, y } => {
                self.touched = true;
                (x, y)
            }
            PointerEvent::Up { x, y } | PointerEvent::Move { x, y } | PointerEvent::Cancel { x, y } => {
                (x, y)
            }
        };
        self.pointer = Vec2::new(x, y);
    }

    /// Returns the touch flag and clears it
    pub fn take_touch(&mut self) -> bool {
        std::mem::take(&mut self.touched)
    }
}
