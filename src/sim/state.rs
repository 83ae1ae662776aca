//! Game state and level lifecycle
//!
//! Level templates are never mutated. Gameplay always runs on a copy of the
//! current template, replaced wholesale on restart or advance.

use crate::ecs::{Scene, Tile, Uuid};
use crate::settings::Settings;
use crate::ui;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball rests on the paddle until the screen is touched
    Start,
    /// Ball in motion
    Playing,
    /// Game-over overlay, waiting for Retry or Exit
    Retry,
}

/// Notable things that happened during a tick, for hosts to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { uuid: Uuid },
    PaddleHit,
    LifeLost { lives_left: u32 },
    LevelCleared { level: usize },
    GameOver { score: u32 },
    ExitRequested,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Immutable level templates, in play order
    pub levels: Vec<Scene>,
    /// Working copy of the current level; `None` when no level loaded
    pub current: Option<Scene>,
    pub hud: Scene,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Index into `levels`, clamped to the last level
    pub level_index: usize,
    /// Set once the player taps Exit; the host should tear down
    pub exit_requested: bool,
    /// Events produced by the latest tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(levels: Vec<Scene>, hud: Scene, settings: Settings) -> Self {
        if levels.is_empty() {
            log::warn!("No levels loaded; game will stay idle");
        }
        let current = levels.first().map(Scene::copy);
        Self {
            lives: settings.max_lives,
            settings,
            levels,
            current,
            hud,
            phase: GamePhase::Start,
            score: 0,
            level_index: 0,
            exit_requested: false,
            events: Vec::new(),
        }
    }

    /// Replace the working scene with a fresh copy of the current template
    pub fn restart_level(&mut self) {
        self.load_current();
        self.phase = GamePhase::Start;
        log::info!("Restarting level {}", self.level_index + 1);
    }

    /// Back to the first level with a full reset, showing the retry overlay
    pub fn restart_game(&mut self) {
        self.level_index = 0;
        self.score = 0;
        self.lives = self.settings.max_lives;
        self.load_current();
        self.phase = GamePhase::Retry;
        log::info!("Game over");
    }

    /// Advance to the next template, staying on the last one when exhausted
    pub fn next_level(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        self.level_index = (self.level_index + 1).min(self.levels.len() - 1);
        self.load_current();
        self.phase = GamePhase::Start;
        log::info!("Advancing to level {}", self.level_index + 1);
    }

    pub fn refresh_hud(&mut self) {
        ui::update_hud(&mut self.hud, self.score, self.lives);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn load_current(&mut self) {
        self.current = self.levels.get(self.level_index).map(Scene::copy);
    }
}

/// Tiles that still have to be destroyed to clear `scene`
pub fn breakable_remaining(scene: &Scene) -> usize {
    scene
        .view::<Tile>()
        .filter(|&entity| scene.get::<Tile>(entity).is_breakable())
        .count()
}
