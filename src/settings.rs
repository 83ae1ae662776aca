//! Gameplay tuning and asset lists
//!
//! Loaded from a JSON file; every field falls back to its default when
//! missing, so a partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Lives at the start of a run
    pub max_lives: u32,

    // === Physics ===
    /// Collision passes per frame, each over an equal slice of the frame
    pub physics_substeps: u32,
    /// Velocity multiplier applied on every brick bounce
    pub bounce_speedup: f32,
    /// Scale applied to the strike offset when steering off the paddle
    pub paddle_steer_strength: f32,
    /// Initial ball velocity (pixels per millisecond)
    pub ball_velocity: Vec2,
    pub ball_radius: f32,
    pub ball_size: Vec2,
    pub paddle_size: Vec2,
    /// Speed cap applied after bounces; `None` lets the ball keep speeding up
    pub max_ball_speed: Option<f32>,
    /// Keep the paddle inside the surface instead of following the pointer
    /// past the edges
    pub clamp_paddle: bool,
    /// Longest frame delta fed to the simulation (milliseconds)
    pub max_frame_dt_ms: f32,

    // === Assets ===
    /// Level files, loaded in order
    pub level_paths: Vec<String>,
    /// Textures in slot order: solid brick, brick, paddle, ball
    pub texture_paths: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_lives: 3,

            physics_substeps: 4,
            bounce_speedup: 1.02,
            paddle_steer_strength: 5.0,
            ball_velocity: Vec2::new(0.25, -1.5),
            ball_radius: 50.0,
            ball_size: Vec2::new(50.0, 50.0),
            paddle_size: Vec2::new(200.0, 50.0),
            max_ball_speed: None,
            clamp_paddle: false,
            max_frame_dt_ms: 100.0,

            level_paths: vec![
                "Levels/level01.txt".to_string(),
                "Levels/level02.txt".to_string(),
                "Levels/level03.txt".to_string(),
            ],
            texture_paths: vec![
                "Textures/block_solid.png".to_string(),
                "Textures/block.png".to_string(),
                "Textures/paddle.png".to_string(),
                "Textures/awesomeface.png".to_string(),
            ],
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// malformed
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.as_ref().display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace values the simulation cannot run with. Substeps never drop
    /// below one; the frame cap and the paddle and ball sizes must be
    /// positive.
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if self.physics_substeps == 0 {
            log::warn!("physics_substeps must be at least 1");
            self.physics_substeps = 1;
        }
        if self.max_frame_dt_ms <= 0.0 {
            log::warn!("max_frame_dt_ms must be positive, got {}", self.max_frame_dt_ms);
            self.max_frame_dt_ms = defaults.max_frame_dt_ms;
        }
        if self.paddle_size.cmple(Vec2::ZERO).any() {
            log::warn!("paddle_size must be positive, got {}", self.paddle_size);
            self.paddle_size = defaults.paddle_size;
        }
        if self.ball_radius <= 0.0 {
            log::warn!("ball_radius must be positive, got {}", self.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let settings = Settings::default();
        assert_eq!(settings.max_lives, 3);
        assert_eq!(settings.physics_substeps, 4);
        assert_eq!(settings.bounce_speedup, 1.02);
        assert_eq!(settings.ball_velocity, Vec2::new(0.25, -1.5));
        assert_eq!(settings.level_paths.len(), 3);
        assert!(settings.max_ball_speed.is_none());
        assert!(!settings.clamp_paddle);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let settings = Settings::from_json(r#"{ "max_lives": 5, "clamp_paddle": true }"#).unwrap();
        assert_eq!(settings.max_lives, 5);
        assert!(settings.clamp_paddle);
        assert_eq!(settings.physics_substeps, 4);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.max_ball_speed = Some(3.0);
        let parsed = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_zero_substeps_is_raised() {
        let settings = Settings::from_json(r#"{ "physics_substeps": 0 }"#).unwrap();
        assert_eq!(settings.physics_substeps, 1);
    }

    #[test]
    fn test_negative_frame_cap_is_reset() {
        let settings = Settings::from_json(r#"{ "max_frame_dt_ms": -5.0 }"#).unwrap();
        assert_eq!(settings.max_frame_dt_ms, 100.0);
    }

    #[test]
    fn test_degenerate_sizes_are_reset() {
        let settings =
            Settings::from_json(r#"{ "paddle_size": [0.0, 50.0], "ball_radius": -1.0 }"#).unwrap();
        assert_eq!(settings.paddle_size, Vec2::new(200.0, 50.0));
        assert_eq!(settings.ball_radius, 50.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here.json");
        assert_eq!(settings, Settings::default());
    }
}
