//! Gameplay simulation
//!
//! Everything that advances the game lives here:
//! - Circle vs box collision and bounce response
//! - Game state, level lifecycle and events
//! - The per-frame tick with its phase state machine
//!
//! Nothing in this module talks to a renderer or a platform API; hosts feed
//! it an [`InputState`](crate::platform::InputState) and a frame delta.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Direction, Rect, check_collision, vector_direction};
pub use state::{GameEvent, GamePhase, GameState, breakable_remaining};
pub use tick::{StepOutcome, step_physics, tick};
