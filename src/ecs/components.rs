//! Component records attached to scene entities
//!
//! The set of component kinds is closed: every kind listed here has a
//! dedicated column in the [`Registry`](super::Registry).

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Stable identifier of an entity, preserved across scene copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uuid(pub u64);

impl std::fmt::Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uuid: Uuid,
}

/// Human readable name, not required to be unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Name given to entities created without one
    pub const DEFAULT_NAME: &'static str = "Entity";

    pub fn new(name: &str) -> Self {
        let name = if name.is_empty() { Self::DEFAULT_NAME } else { name };
        Self {
            name: name.to_string(),
        }
    }
}

/// Placement of an entity. `translation` is the top-left corner of the
/// sprite quad in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Gates rendering and, by convention, interactivity
    pub enabled: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            enabled: true,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Translate * rotate * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Model matrix for a unit quad anchored at its top-left corner,
    /// rotating about the quad centre.
    pub fn sprite_matrix(&self) -> Mat4 {
        let half = Vec3::new(0.5 * self.scale.x, 0.5 * self.scale.y, 0.0);
        Mat4::from_translation(self.translation)
            * Mat4::from_translation(half)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_translation(-half)
            * Mat4::from_scale(self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub color: Vec3,
    /// Slot returned by the renderer's `load_texture`
    pub texture: u32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            texture: 0,
        }
    }
}

impl Sprite {
    pub fn new(color: Vec3, texture: u32) -> Self {
        Self { color, texture }
    }

    pub fn textured(texture: u32) -> Self {
        Self {
            color: Vec3::ONE,
            texture,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    /// Indestructible, does not count toward level clear
    #[default]
    Solid,
    Breakable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    pub fn is_breakable(&self) -> bool {
        self.kind == TileKind::Breakable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    /// Pixels per millisecond
    pub velocity: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(velocity: Vec2, radius: f32) -> Self {
        Self { velocity, radius }
    }
}

/// Paddle attributes. Kept for schema completeness; gameplay reads the
/// paddle's transform only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    pub lives: u32,
    pub speed: u32,
}

/// HUD label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    pub color: Vec3,
}

impl Text {
    pub fn new(text: &str, color: Vec3) -> Self {
        Self {
            text: text.to_string(),
            color,
        }
    }
}
