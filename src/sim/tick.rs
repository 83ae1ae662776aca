//! Per-frame update
//!
//! One call to [`tick`] applies input, runs the phase state machine and, while
//! playing, advances the ball over a fixed number of equal physics substeps.
//! Each substep integrates the ball, reflects it off the walls and resolves
//! brick and paddle collisions.

use glam::Vec2;

use super::collision::{check_collision, paddle_bounce, resolve_bounce};
use super::state::{GameEvent, GamePhase, GameState, breakable_remaining};
use crate::consts::{BALL_TAG, PLAYER_TAG};
use crate::ecs::{Ball, Entity, Scene, Tile, Transform};
use crate::platform::{InputState, Surface};
use crate::settings::Settings;
use crate::ui::{self, OverlayButton};

/// Outcome of one physics substep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// Ball crossed the bottom of the surface
    BallLost,
}

/// Advance the game by one frame of `dt_ms` milliseconds.
///
/// `state.events` is cleared first, so after the call it holds exactly the
/// events this frame produced.
pub fn tick(state: &mut GameState, input: &mut InputState, dt_ms: f32, surface: Surface) {
    state.events.clear();

    // The cap is public and may bypass `Settings::sanitize`
    let cap = state.settings.max_frame_dt_ms.max(0.0);
    let dt = dt_ms.max(0.0).min(cap);

    let Some((player, ball)) = state.current.as_ref().and_then(find_actors) else {
        return;
    };

    match state.phase {
        GamePhase::Start => update_start(state, input, player, ball),
        GamePhase::Playing => update_playing(state, input, player, ball, dt, surface),
        GamePhase::Retry => update_retry(state, input),
    }
}

fn find_actors(scene: &Scene) -> Option<(Entity, Entity)> {
    Some((
        scene.find_entity_by_name(PLAYER_TAG)?,
        scene.find_entity_by_name(BALL_TAG)?,
    ))
}

fn update_start(state: &mut GameState, input: &mut InputState, player: Entity, ball: Entity) {
    if input.take_touch() {
        state.phase = GamePhase::Playing;
    }
    ui::set_overlay_visible(&mut state.hud, false);

    if let Some(scene) = state.current.as_mut() {
        rest_ball_on_paddle(scene, player, ball);
    }
}

/// Park the ball above the paddle, flush with its centre
pub fn rest_ball_on_paddle(scene: &mut Scene, player: Entity, ball: Entity) {
    let paddle = *scene.get::<Transform>(player);
    let radius = scene.get::<Ball>(ball).radius;
    let offset = Vec2::new(paddle.scale.x / 2.0 - radius * 2.0, -radius * 2.0);
    scene.get_mut::<Transform>(ball).translation = paddle.translation + offset.extend(0.0);
}

fn update_playing(
    state: &mut GameState,
    input: &InputState,
    player: Entity,
    ball: Entity,
    dt: f32,
    surface: Surface,
) {
    let lost = {
        let Some(scene) = state.current.as_mut() else {
            return;
        };
        move_paddle(scene, player, input.pointer.x, &state.settings, surface);

        let substeps = state.settings.physics_substeps.max(1);
        let step_dt = dt / substeps as f32;
        (0..substeps).any(|_| {
            step_physics(
                scene,
                player,
                ball,
                step_dt,
                surface,
                &state.settings,
                &mut state.score,
                &mut state.events,
            ) == StepOutcome::BallLost
        })
    };

    if lost {
        lose_life(state);
        return;
    }

    let cleared = state.current.as_ref().is_some_and(|scene| breakable_remaining(scene) == 0);
    if cleared {
        let level = state.level_index;
        state.events.push(GameEvent::LevelCleared { level });
        state.next_level();
    }
}

fn move_paddle(scene: &mut Scene, player: Entity, x: f32, settings: &Settings, surface: Surface) {
    let transform = scene.get_mut::<Transform>(player);
    transform.translation.x = if settings.clamp_paddle {
        let max_x = (surface.width as f32 - transform.scale.x).max(0.0);
        x.clamp(0.0, max_x)
    } else {
        x
    };
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });
    log::debug!("Life lost, {} left", state.lives);

    if state.lives == 0 {
        state.events.push(GameEvent::GameOver { score: state.score });
        state.restart_game();
    } else {
        state.restart_level();
    }
}

fn update_retry(state: &mut GameState, input: &mut InputState) {
    ui::set_overlay_visible(&mut state.hud, true);

    if !input.take_touch() {
        return;
    }
    match ui::hit_test_overlay(&state.hud, input.pointer) {
        Some(OverlayButton::Retry) => {
            state.phase = GamePhase::Start;
        }
        Some(OverlayButton::Exit) => {
            if !state.exit_requested {
                log::info!("Exit requested");
                state.events.push(GameEvent::ExitRequested);
            }
            state.exit_requested = true;
        }
        None => {}
    }
}

/// One physics substep: integrate the ball over `dt` milliseconds, bounce it
/// off the side and top walls, then resolve brick and paddle collisions.
/// Breakable bricks that are hit are destroyed and scored.
#[allow(clippy::too_many_arguments)]
pub fn step_physics(
    scene: &mut Scene,
    player: Entity,
    ball: Entity,
    dt: f32,
    surface: Surface,
    settings: &Settings,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) -> StepOutcome {
    let mut ball_transform = *scene.get::<Transform>(ball);
    let mut ball_state = *scene.get::<Ball>(ball);

    ball_transform.translation += (ball_state.velocity * dt).extend(0.0);

    let width = surface.width as f32;
    let height = surface.height as f32;
    let position = &mut ball_transform.translation;
    if position.x <= 0.0 {
        ball_state.velocity.x = -ball_state.velocity.x;
        position.x = 0.0;
    } else if position.x + ball_state.radius >= width {
        ball_state.velocity.x = -ball_state.velocity.x;
        position.x = width - ball_state.radius;
    }
    if position.y <= 0.0 {
        ball_state.velocity.y = -ball_state.velocity.y;
        position.y = 0.0;
    } else if position.y >= height {
        *scene.get_mut::<Transform>(ball) = ball_transform;
        *scene.get_mut::<Ball>(ball) = ball_state;
        return StepOutcome::BallLost;
    }

    let bricks: Vec<Entity> = scene.view::<(Transform, Tile)>().collect();
    for brick in bricks {
        let obstacle = scene.get::<Transform>(brick);
        if !obstacle.enabled {
            continue;
        }
        let collision = check_collision(obstacle, &ball_transform, &ball_state);
        if !collision.hit {
            continue;
        }

        resolve_bounce(&collision, &mut ball_transform, &mut ball_state, settings.bounce_speedup);
        cap_speed(&mut ball_state, settings);

        if scene.get::<Tile>(brick).is_breakable() {
            *score += 1;
            let uuid = scene.uuid(brick);
            events.push(GameEvent::BrickDestroyed { uuid });
            log::debug!("Brick {uuid} destroyed, score {score}");
            scene.destroy_entity(brick);
        }
    }

    let paddle = *scene.get::<Transform>(player);
    if check_collision(&paddle, &ball_transform, &ball_state).hit {
        paddle_bounce(
            &paddle,
            &ball_transform,
            &mut ball_state,
            settings.ball_velocity.x,
            settings.paddle_steer_strength,
        );
        cap_speed(&mut ball_state, settings);
        events.push(GameEvent::PaddleHit);
    }

    *scene.get_mut::<Transform>(ball) = ball_transform;
    *scene.get_mut::<Ball>(ball) = ball_state;
    StepOutcome::Continue
}

fn cap_speed(ball: &mut Ball, settings: &Settings) {
    if let Some(max) = settings.max_ball_speed {
        ball.velocity = ball.velocity.clamp_length_max(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HUD_EXIT, HUD_RETRY};
    use crate::ecs::Uuid;
    use crate::level::{build_level, parse_grid};
    use crate::platform::PointerEvent;
    use glam::Vec3;

    const SURFACE: Surface = Surface {
        width: 800,
        height: 1600,
    };
    const FRAME_MS: f32 = 16.0;

    fn state_with(levels: &[&str], settings: Settings) -> GameState {
        let levels = levels
            .iter()
            .map(|text| build_level(&parse_grid(text).unwrap(), SURFACE, &settings))
            .collect();
        GameState::new(levels, ui::build_hud(SURFACE), settings)
    }

    fn actors(state: &GameState) -> (Entity, Entity) {
        find_actors(state.current.as_ref().unwrap()).unwrap()
    }

    fn scene(state: &GameState) -> &Scene {
        state.current.as_ref().unwrap()
    }

    fn scene_mut(state: &mut GameState) -> &mut Scene {
        state.current.as_mut().unwrap()
    }

    fn tap(x: f32, y: f32) -> InputState {
        let mut input = InputState::new();
        input.apply(PointerEvent::Down { x, y });
        input
    }

    #[test]
    fn test_start_waits_for_touch() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        let mut input = InputState::new();
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Start);

        // Ball rests above the paddle: paddle at (400, 1400), width 200, radius 50
        let (_, ball) = actors(&state);
        assert_eq!(
            scene(&state).get::<Transform>(ball).translation,
            Vec3::new(400.0, 1300.0, 0.0)
        );
    }

    #[test]
    fn test_touch_starts_play_and_is_consumed() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        let mut input = tap(300.0, 300.0);
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!input.touched);
    }

    #[test]
    fn test_start_hides_overlay() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        ui::set_overlay_visible(&mut state.hud, true);
        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        let retry = state.hud.find_entity_by_name(HUD_RETRY).unwrap();
        assert!(!state.hud.get::<Transform>(retry).enabled);
    }

    #[test]
    fn test_paddle_follows_pointer_unclamped() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        let mut input = InputState::new();
        input.apply(PointerEvent::Move { x: 5000.0, y: 0.0 });
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        let (player, _) = actors(&state);
        assert_eq!(scene(&state).get::<Transform>(player).translation.x, 5000.0);
    }

    #[test]
    fn test_paddle_clamp_option() {
        let settings = Settings {
            clamp_paddle: true,
            ..Default::default()
        };
        let mut state = state_with(&["2 2\n"], settings);
        state.phase = GamePhase::Playing;
        let mut input = InputState::new();
        input.apply(PointerEvent::Move { x: 5000.0, y: 0.0 });
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        let (player, _) = actors(&state);
        assert_eq!(scene(&state).get::<Transform>(player).translation.x, 600.0);
    }

    #[test]
    fn test_brick_hit_scores_and_speeds_up() {
        let settings = Settings::default();
        let mut state = state_with(&["2 0\n0 0\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);

        // Brick spans (200..400, 200..400); ball centre sits 10px left of it
        scene.get_mut::<Transform>(ball).translation = Vec3::new(140.0, 250.0, 0.0);
        let before = scene.get::<Ball>(ball).velocity;

        let mut score = 0;
        let mut events = Vec::new();
        let outcome = step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut score, &mut events);

        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(score, 1);
        assert!(matches!(events[0], GameEvent::BrickDestroyed { .. }));
        assert_eq!(breakable_remaining(scene), 0);

        let after = scene.get::<Ball>(ball).velocity;
        assert!((after.length() - before.length() * 1.02).abs() < 1e-5);
        assert!(after.x < 0.0);
        assert_eq!(scene.get::<Transform>(ball).translation.x, 100.0);
    }

    #[test]
    fn test_solid_brick_survives_hit() {
        let settings = Settings::default();
        let mut state = state_with(&["1 0\n0 0\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        scene.get_mut::<Transform>(ball).translation = Vec3::new(140.0, 250.0, 0.0);

        let mut score = 0;
        let mut events = Vec::new();
        step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut score, &mut events);
        assert_eq!(score, 0);
        assert!(events.is_empty());
        assert_eq!(scene.view::<Tile>().count(), 1);
    }

    #[test]
    fn test_speed_cap_limits_bounce() {
        let settings = Settings {
            max_ball_speed: Some(1.0),
            ..Default::default()
        };
        let mut state = state_with(&["2 0\n0 0\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        scene.get_mut::<Transform>(ball).translation = Vec3::new(140.0, 250.0, 0.0);

        let mut score = 0;
        let mut events = Vec::new();
        step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut score, &mut events);
        assert!(scene.get::<Ball>(ball).velocity.length() <= 1.0 + 1e-5);
    }

    #[test]
    fn test_walls_reflect() {
        let settings = Settings::default();
        let mut state = state_with(&["0 2\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        scene.get_mut::<Transform>(ball).translation = Vec3::new(1.0, 600.0, 0.0);
        scene.get_mut::<Ball>(ball).velocity = Vec2::new(-1.0, -1.0);

        let mut score = 0;
        let mut events = Vec::new();
        step_physics(scene, player, ball, 4.0, SURFACE, &settings, &mut score, &mut events);
        assert_eq!(scene.get::<Transform>(ball).translation.x, 0.0);
        assert_eq!(scene.get::<Ball>(ball).velocity, Vec2::new(1.0, -1.0));

        scene.get_mut::<Transform>(ball).translation = Vec3::new(300.0, 1.0, 0.0);
        step_physics(scene, player, ball, 4.0, SURFACE, &settings, &mut score, &mut events);
        assert_eq!(scene.get::<Transform>(ball).translation.y, 0.0);
        assert_eq!(scene.get::<Ball>(ball).velocity, Vec2::new(1.0, 1.0));

        scene.get_mut::<Transform>(ball).translation = Vec3::new(748.0, 600.0, 0.0);
        step_physics(scene, player, ball, 4.0, SURFACE, &settings, &mut score, &mut events);
        assert_eq!(scene.get::<Transform>(ball).translation.x, 750.0);
        assert_eq!(scene.get::<Ball>(ball).velocity.x, -1.0);
    }

    #[test]
    fn test_paddle_hit_keeps_speed() {
        let settings = Settings::default();
        let mut state = state_with(&["0 2\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        // Paddle spans (400..600, 1400..1450); ball centre just above its left half
        scene.get_mut::<Transform>(ball).translation = Vec3::new(410.0, 1310.0, 0.0);
        scene.get_mut::<Ball>(ball).velocity = Vec2::new(0.5, 1.0);
        let before = scene.get::<Ball>(ball).velocity.length();

        let mut score = 0;
        let mut events = Vec::new();
        step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut score, &mut events);
        let after = scene.get::<Ball>(ball).velocity;
        assert_eq!(events, vec![GameEvent::PaddleHit]);
        assert!((after.length() - before).abs() < 1e-5);
        assert!(after.y < 0.0);
        assert!(after.x < 0.0);
    }

    #[test]
    fn test_ball_lost_restarts_current_level() {
        let mut state = state_with(&["2 2\n", "2 0\n"], Settings::default());
        state.next_level();
        state.phase = GamePhase::Playing;
        let (_, ball) = actors(&state);
        scene_mut(&mut state).get_mut::<Transform>(ball).translation = Vec3::new(300.0, 1700.0, 0.0);

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level_index, 1);
        assert!(state.events.contains(&GameEvent::LifeLost { lives_left: 2 }));

        let (_, ball) = actors(&state);
        assert_eq!(
            scene(&state).get::<Transform>(ball).translation,
            Vec3::new(400.0, 1400.0, 0.0)
        );
    }

    #[test]
    fn test_last_life_lost_goes_to_retry() {
        let mut state = state_with(&["2 2\n", "2 0\n"], Settings::default());
        state.next_level();
        state.phase = GamePhase::Playing;
        state.lives = 1;
        state.score = 7;
        let (_, ball) = actors(&state);
        scene_mut(&mut state).get_mut::<Transform>(ball).translation = Vec3::new(300.0, 1700.0, 0.0);

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Retry);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level_index, 0);
        assert!(state.events.contains(&GameEvent::GameOver { score: 7 }));
    }

    #[test]
    fn test_all_solid_level_advances() {
        let mut state = state_with(&["1 1\n", "2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 0 }));
        assert_eq!(breakable_remaining(scene(&state)), 2);
    }

    #[test]
    fn test_breakable_remaining_keeps_playing() {
        let mut state = state_with(&["1 2\n", "2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_gameplay_never_touches_template() {
        let settings = Settings::default();
        let mut state = state_with(&["2 0\n0 0\n"], settings.clone());
        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        scene.get_mut::<Transform>(ball).translation = Vec3::new(140.0, 250.0, 0.0);
        let mut score = 0;
        step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut score, &mut Vec::new());

        assert_eq!(breakable_remaining(state.current.as_ref().unwrap()), 0);
        assert_eq!(breakable_remaining(&state.levels[0]), 1);
        let template_ball = state.levels[0].find_entity_by_name(BALL_TAG).unwrap();
        assert_eq!(
            state.levels[0].get::<Transform>(template_ball).translation,
            Vec3::new(400.0, 1400.0, 0.0)
        );
    }

    #[test]
    fn test_frame_integrates_full_delta_across_substeps() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        let (_, ball) = actors(&state);
        scene_mut(&mut state).get_mut::<Transform>(ball).translation = Vec3::new(100.0, 800.0, 0.0);

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(
            scene(&state).get::<Transform>(ball).translation,
            Vec3::new(104.0, 776.0, 0.0)
        );
    }

    #[test]
    fn test_mid_frame_substep_catches_thin_brick() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        let (_, ball) = actors(&state);
        let level = scene_mut(&mut state);

        // Ball centre runs 850 -> 810 -> 770 -> 730 -> 690. Only the second
        // substep comes within one radius of the strip at y 752..754; the
        // start and end positions both miss it.
        let strip = level.view::<Tile>().next().unwrap();
        let transform = level.get_mut::<Transform>(strip);
        transform.translation = Vec3::new(0.0, 752.0, 0.0);
        transform.scale = Vec3::new(800.0, 2.0, 1.0);
        let strip_uuid = level.uuid(strip);
        level.get_mut::<Transform>(ball).translation = Vec3::new(400.0, 800.0, 0.0);
        level.get_mut::<Ball>(ball).velocity = Vec2::new(0.0, -10.0);

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(state.score, 1);
        assert!(state.events.contains(&GameEvent::BrickDestroyed { uuid: strip_uuid }));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(scene(&state).get::<Ball>(ball).velocity.y > 0.0);
    }

    #[test]
    fn test_negative_frame_cap_does_not_panic() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.settings.max_frame_dt_ms = -5.0;
        state.phase = GamePhase::Playing;
        let (_, ball) = actors(&state);
        let before = scene(&state).get::<Transform>(ball).translation;

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert_eq!(scene(&state).get::<Transform>(ball).translation, before);
    }

    #[test]
    fn test_frame_delta_is_capped() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Playing;
        let (_, ball) = actors(&state);
        scene_mut(&mut state).get_mut::<Transform>(ball).translation = Vec3::new(100.0, 800.0, 0.0);

        // 100 ms cap: moves (25, -150) rather than (250, -1500)
        tick(&mut state, &mut InputState::new(), 1000.0, SURFACE);
        assert_eq!(
            scene(&state).get::<Transform>(ball).translation,
            Vec3::new(125.0, 650.0, 0.0)
        );
    }

    #[test]
    fn test_events_hold_only_latest_tick() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Retry;
        let rect = ui::button_rect(&state.hud, HUD_EXIT).unwrap();
        let mut input = tap(rect.origin.x + 10.0, rect.origin.y + 10.0);
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.events, vec![GameEvent::ExitRequested]);

        tick(&mut state, &mut InputState::new(), FRAME_MS, SURFACE);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_retry_button_returns_to_start() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Retry;
        let rect = ui::button_rect(&state.hud, HUD_RETRY).unwrap();
        let mut input = tap(rect.origin.x + 10.0, rect.origin.y + 10.0);

        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(!state.exit_requested);
        assert!(!input.touched);
    }

    #[test]
    fn test_exit_button_requests_exit() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Retry;
        let rect = ui::button_rect(&state.hud, HUD_EXIT).unwrap();
        let mut input = tap(rect.origin.x + 10.0, rect.origin.y + 10.0);

        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert!(state.exit_requested);
        assert_eq!(state.phase, GamePhase::Retry);
        assert_eq!(state.drain_events(), vec![GameEvent::ExitRequested]);
    }

    #[test]
    fn test_retry_overlay_ignores_stray_taps() {
        let mut state = state_with(&["2 2\n"], Settings::default());
        state.phase = GamePhase::Retry;
        let mut input = tap(1.0, 1.0);
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Retry);
        assert!(!input.touched);

        let over = state.hud.find_entity_by_name(crate::consts::HUD_GAME_OVER).unwrap();
        assert!(state.hud.get::<Transform>(over).enabled);
    }

    #[test]
    fn test_no_levels_is_idle() {
        let mut state = state_with(&[], Settings::default());
        let mut input = tap(1.0, 1.0);
        tick(&mut state, &mut input, FRAME_MS, SURFACE);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(input.touched);
    }

    #[test]
    fn test_brick_event_carries_template_uuid() {
        let settings = Settings::default();
        let mut state = state_with(&["2 0\n0 0\n"], settings.clone());
        let template_brick = state.levels[0].view::<Tile>().next().unwrap();
        let template_uuid: Uuid = state.levels[0].uuid(template_brick);

        let (player, ball) = actors(&state);
        let scene = scene_mut(&mut state);
        scene.get_mut::<Transform>(ball).translation = Vec3::new(140.0, 250.0, 0.0);
        let mut events = Vec::new();
        step_physics(scene, player, ball, 0.0, SURFACE, &settings, &mut 0, &mut events);
        assert_eq!(events, vec![GameEvent::BrickDestroyed { uuid: template_uuid }]);
    }
}
