//! Breakout - a brick-breaking arcade game core
//!
//! Core modules:
//! - `ecs`: Entity registry and scenes with stable entity UUIDs
//! - `level`: Level templates built from text tile grids
//! - `sim`: Collision physics, game state and the per-frame tick
//! - `ui`: HUD labels and the game-over overlay
//! - `renderer`: Renderer seam and draw-data extraction
//! - `platform`: Input, timing and asset abstractions
//! - `settings`: Data-driven gameplay tuning
//! - `game`: Driver tying the above into a frame loop

pub mod ecs;
pub mod game;
pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::Settings;

/// Game-wide names and slots
pub mod consts {
    /// Entity tags the tick looks up by name
    pub const PLAYER_TAG: &str = "Player";
    pub const BALL_TAG: &str = "Ball";
    pub const BRICK_TAG: &str = "Brick";

    /// HUD label names
    pub const HUD_SCORE: &str = "Score";
    pub const HUD_LIVES: &str = "Lives";
    pub const HUD_GAME_OVER: &str = "GameOver";
    pub const HUD_RETRY: &str = "Retry";
    pub const HUD_EXIT: &str = "Exit";

    /// Texture slots, in the order `Settings::texture_paths` lists them
    pub const TEXTURE_SOLID: u32 = 0;
    pub const TEXTURE_BRICK: u32 = 1;
    pub const TEXTURE_PADDLE: u32 = 2;
    pub const TEXTURE_BALL: u32 = 3;
}
