//! Per-entity draw data extracted from a scene

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::ecs::{Scene, Sprite, Text, Transform};

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

/// One textured quad, laid out for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Column-major model matrix for a unit quad
    pub model: [[f32; 4]; 4], // offset 0
    pub color: [f32; 3],      // offset 64
    pub texture: u32,         // offset 76
}

impl SpriteInstance {
    pub fn new(transform: &Transform, sprite: &Sprite) -> Self {
        Self {
            model: transform.sprite_matrix().to_cols_array_2d(),
            color: sprite.color.to_array(),
            texture: sprite.texture,
        }
    }
}

/// A HUD label ready for a text renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Vec2,
    pub scale: Vec2,
    pub color: Vec3,
}

/// Sprite instances for every enabled entity with a sprite, in view order
pub fn collect_sprites(scene: &Scene) -> Vec<SpriteInstance> {
    scene
        .view::<(Transform, Sprite)>()
        .filter_map(|entity| {
            let transform = scene.get::<Transform>(entity);
            transform
                .enabled
                .then(|| SpriteInstance::new(transform, scene.get::<Sprite>(entity)))
        })
        .collect()
}

/// Text runs for every enabled entity with a label
pub fn collect_text(scene: &Scene) -> Vec<TextRun> {
    scene
        .view::<(Transform, Text)>()
        .filter_map(|entity| {
            let transform = scene.get::<Transform>(entity);
            if !transform.enabled {
                return None;
            }
            let label = scene.get::<Text>(entity);
            Some(TextRun {
                text: label.text.clone(),
                position: transform.translation.truncate(),
                scale: transform.scale.truncate(),
                color: label.color,
            })
        })
        .collect()
}
