//! Platform abstraction layer
//!
//! Narrow host-facing interfaces the simulation consumes:
//! - Input: pointer snapshot with an edge-triggered touch flag
//! - Time: frame clock bracketing each update
//! - Assets: text resources such as level files

pub mod assets;
pub mod input;
pub mod time;

pub use assets::{AssetSource, FsAssets, MemoryAssets};
pub use input::{InputState, PointerEvent};
pub use time::{Clock, FixedClock, FrameClock};

/// Size of the render surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
