//! Host-facing game driver
//!
//! Owns the collaborators (renderer, clock, asset source) and the game
//! state, and strings one frame together: measure, tick, refresh the HUD,
//! draw the level then the HUD on top, present.

use crate::platform::{AssetSource, Clock, InputState};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::{level, ui};

pub struct Game<R: Renderer, C: Clock, A: AssetSource> {
    renderer: R,
    clock: C,
    assets: A,
    settings: Settings,
    /// `None` until [`Game::start`]
    state: Option<GameState>,
}

impl<R: Renderer, C: Clock, A: AssetSource> Game<R, C, A> {
    pub fn new(renderer: R, clock: C, assets: A, settings: Settings) -> Self {
        Self {
            renderer,
            clock,
            assets,
            settings,
            state: None,
        }
    }

    /// Load textures, level templates and the HUD, then make a working copy
    /// of the first level. Calling it again reloads everything.
    pub fn start(&mut self) {
        for (expected, path) in self.settings.texture_paths.iter().enumerate() {
            let slot = self.renderer.load_texture(path);
            if slot as usize != expected {
                log::warn!("Texture {path} landed in slot {slot}, sprites expect {expected}");
            }
        }

        let surface = self.renderer.surface();
        let levels = level::load_levels(&self.assets, surface, &self.settings);
        let hud = ui::build_hud(surface);

        let mut state = GameState::new(levels, hud, self.settings.clone());
        state.refresh_hud();
        self.state = Some(state);
        log::info!("Game started on {}x{} surface", surface.width, surface.height);
    }

    /// Run one frame and return the events it produced. Does nothing before
    /// [`Game::start`].
    pub fn frame(&mut self, input: &mut InputState) -> Vec<GameEvent> {
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };

        self.clock.start_frame();

        let surface = self.renderer.surface();
        tick(state, input, self.clock.delta_time(), surface);
        state.refresh_hud();

        if let Some(scene) = state.current.as_ref() {
            self.renderer.render(scene, true);
            self.renderer.render(&state.hud, false);
        } else {
            self.renderer.render(&state.hud, true);
        }
        self.renderer.flush();

        self.clock.end_frame();
        state.drain_events()
    }

    pub fn exit_requested(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.exit_requested)
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
