//! Breakout entry point
//!
//! Runs a headless session: levels load from disk, the paddle is steered
//! under the ball automatically, and events are logged. Pass the asset root
//! as the first argument (defaults to `assets`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::consts::{BALL_TAG, HUD_EXIT, PLAYER_TAG};
    use breakout::ecs::{Ball, Transform};
    use breakout::platform::{FixedClock, FsAssets, InputState, PointerEvent};
    use breakout::renderer::HeadlessRenderer;
    use breakout::sim::{GameEvent, GamePhase};
    use breakout::{Game, Settings, ui};

    /// Five minutes at 60 fps
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    const FRAME_MS: f32 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let root = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
    let settings = Settings::load_or_default("breakout.json");

    let mut game = Game::new(
        HeadlessRenderer::new(800, 1600),
        FixedClock::new(FRAME_MS),
        FsAssets::new(root),
        settings,
    );
    game.start();

    let mut input = InputState::new();
    let mut frames = 0;
    while frames < MAX_FRAMES && !game.exit_requested() {
        let Some(state) = game.state() else { break };

        match state.phase {
            GamePhase::Start => input.apply(PointerEvent::Down { x: 400.0, y: 800.0 }),
            GamePhase::Playing => {
                // Keep the paddle centred under the ball
                if let Some(scene) = state.current.as_ref() {
                    let ball = scene.find_entity_by_name(BALL_TAG);
                    let player = scene.find_entity_by_name(PLAYER_TAG);
                    if let (Some(ball), Some(player)) = (ball, player) {
                        let center = scene.get::<Transform>(ball).translation.x + scene.get::<Ball>(ball).radius;
                        let half_paddle = scene.get::<Transform>(player).scale.x / 2.0;
                        input.apply(PointerEvent::Move {
                            x: center - half_paddle,
                            y: 1400.0,
                        });
                    }
                }
            }
            GamePhase::Retry => {
                if let Some(rect) = ui::button_rect(&state.hud, HUD_EXIT) {
                    let target = rect.origin + rect.size / 2.0;
                    input.apply(PointerEvent::Down {
                        x: target.x,
                        y: target.y,
                    });
                }
            }
        }

        for event in game.frame(&mut input) {
            match event {
                GameEvent::GameOver { score } => log::info!("Game over with score {score}"),
                GameEvent::LevelCleared { level } => log::info!("Level {} cleared", level + 1),
                other => log::debug!("{other:?}"),
            }
        }
        frames += 1;
    }

    let score = game.state().map_or(0, |state| state.score);
    log::info!("Session ended after {frames} frames, score {score}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `breakout::Game` themselves
}
