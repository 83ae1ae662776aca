//! Heads-up display scene
//!
//! The HUD is a long-lived scene of text labels addressed by name. It is
//! mutated in place every frame and never duplicated.

use glam::{Vec2, Vec3};

use crate::consts::{HUD_EXIT, HUD_GAME_OVER, HUD_LIVES, HUD_RETRY, HUD_SCORE};
use crate::ecs::{Scene, Text, Transform};
use crate::platform::Surface;
use crate::sim::collision::Rect;

pub const HUD_TEXT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
/// Touch target of the Retry and Exit labels, anchored at their translation
pub const BUTTON_SIZE: Vec2 = Vec2::new(150.0, 50.0);

const LABEL_SCALE: Vec3 = Vec3::new(2.0, 2.0, 1.0);

/// Buttons on the game-over overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayButton {
    Retry,
    Exit,
}

pub fn build_hud(surface: Surface) -> Scene {
    let mut hud = Scene::new();
    let center_x = (surface.width / 2) as f32 - 250.0;
    let center_y = (surface.height / 2) as f32;

    add_label(&mut hud, HUD_SCORE, "Score", Vec2::new(0.0, 150.0), true);
    add_label(&mut hud, HUD_LIVES, "Lives", Vec2::ZERO, true);
    add_label(&mut hud, HUD_GAME_OVER, "Game Over", Vec2::new(center_x, center_y), false);
    add_label(&mut hud, HUD_RETRY, "Retry", Vec2::new(center_x, center_y + 150.0), false);
    add_label(&mut hud, HUD_EXIT, "Exit", Vec2::new(center_x, center_y + 300.0), false);
    hud
}

fn add_label(hud: &mut Scene, id: &str, text: &str, position: Vec2, enabled: bool) {
    let label = hud.create_entity(id);
    let transform = hud.get_mut::<Transform>(label);
    transform.translation = position.extend(0.0);
    transform.scale = LABEL_SCALE;
    transform.enabled = enabled;
    hud.add(label, Text::new(text, HUD_TEXT_COLOR));
}

/// Refresh the score and lives counters
pub fn update_hud(hud: &mut Scene, score: u32, lives: u32) {
    set_text(hud, HUD_SCORE, format!("Score: {score}"));
    set_text(hud, HUD_LIVES, format!("Lives: {lives}"));
}

fn set_text(hud: &mut Scene, id: &str, text: String) {
    let Some(label) = hud.find_entity_by_name(id) else {
        log::debug!("HUD label {id} missing");
        return;
    };
    if let Some(component) = hud.try_get_mut::<Text>(label) {
        component.text = text;
    }
}

/// Show or hide the game-over overlay (title plus both buttons)
pub fn set_overlay_visible(hud: &mut Scene, visible: bool) {
    for id in [HUD_GAME_OVER, HUD_RETRY, HUD_EXIT] {
        if let Some(label) = hud.find_entity_by_name(id) {
            hud.get_mut::<Transform>(label).enabled = visible;
        }
    }
}

pub fn button_rect(hud: &Scene, id: &str) -> Option<Rect> {
    let label = hud.find_entity_by_name(id)?;
    let origin = hud.get::<Transform>(label).translation.truncate();
    Some(Rect::new(origin, BUTTON_SIZE))
}

/// Which overlay button, if any, lies under `point`. Retry wins when the
/// rectangles overlap.
pub fn hit_test_overlay(hud: &Scene, point: Vec2) -> Option<OverlayButton> {
    let hit = |id: &str| button_rect(hud, id).is_some_and(|rect| rect.contains(point));
    if hit(HUD_RETRY) {
        Some(OverlayButton::Retry)
    } else if hit(HUD_EXIT) {
        Some(OverlayButton::Exit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(1000, 2000)
    }

    #[test]
    fn test_hud_has_every_label() {
        let hud = build_hud(surface());
        for id in [HUD_SCORE, HUD_LIVES, HUD_GAME_OVER, HUD_RETRY, HUD_EXIT] {
            let label = hud.find_entity_by_name(id).expect("label exists");
            assert!(hud.has::<Text>(label));
        }
        let over = hud.find_entity_by_name(HUD_GAME_OVER).unwrap();
        assert!(!hud.get::<Transform>(over).enabled);
    }

    #[test]
    fn test_update_hud_text() {
        let mut hud = build_hud(surface());
        update_hud(&mut hud, 12, 2);
        let score = hud.find_entity_by_name(HUD_SCORE).unwrap();
        assert_eq!(hud.get::<Text>(score).text, "Score: 12");
        let lives = hud.find_entity_by_name(HUD_LIVES).unwrap();
        assert_eq!(hud.get::<Text>(lives).text, "Lives: 2");
    }

    #[test]
    fn test_overlay_visibility() {
        let mut hud = build_hud(surface());
        set_overlay_visible(&mut hud, true);
        for id in [HUD_GAME_OVER, HUD_RETRY, HUD_EXIT] {
            let label = hud.find_entity_by_name(id).unwrap();
            assert!(hud.get::<Transform>(label).enabled);
        }
        set_overlay_visible(&mut hud, false);
        let retry = hud.find_entity_by_name(HUD_RETRY).unwrap();
        assert!(!hud.get::<Transform>(retry).enabled);
    }

    #[test]
    fn test_hit_test_overlay() {
        let hud = build_hud(surface());
        // Retry at (250, 1150), Exit at (250, 1300)
        assert_eq!(hit_test_overlay(&hud, Vec2::new(300.0, 1170.0)), Some(OverlayButton::Retry));
        assert_eq!(hit_test_overlay(&hud, Vec2::new(399.0, 1349.0)), Some(OverlayButton::Exit));
        assert_eq!(hit_test_overlay(&hud, Vec2::new(10.0, 10.0)), None);
    }
}
