//! Level templates from text tile grids
//!
//! A level file holds one row per line with whitespace separated codes:
//!
//! ```text
//! 1 1 1 1 1 1
//! 2 2 0 0 2 2
//! 3 3 4 4 3 3
//! ```
//!
//! `0` is empty, `1` an indestructible brick, anything higher a breakable
//! brick whose colour depends on the code. The grid spans the surface width
//! and the top half of the surface.

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::consts::{BALL_TAG, BRICK_TAG, PLAYER_TAG, TEXTURE_BALL, TEXTURE_BRICK, TEXTURE_PADDLE, TEXTURE_SOLID};
use crate::ecs::{Ball, Player, Scene, Sprite, Tile, TileKind, Transform};
use crate::platform::{AssetSource, Surface};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}, column {column}: invalid tile code {token:?}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line} has {found} tiles, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no tiles")]
    Empty,
}

/// Grey tint of indestructible bricks
pub const SOLID_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.8);

/// Tint for a breakable brick code
pub fn brick_color(code: u32) -> Vec3 {
    match code {
        2 => Vec3::new(0.2, 0.6, 1.0),
        3 => Vec3::new(0.0, 0.7, 0.0),
        4 => Vec3::new(0.8, 0.8, 0.4),
        5 => Vec3::new(1.0, 0.5, 0.0),
        _ => Vec3::ONE,
    }
}

/// Rectangular grid of tile codes, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<u32>>,
}

impl TileGrid {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }
}

/// Parse level text. Blank lines are skipped; every remaining line must hold
/// the same number of codes.
pub fn parse_grid(text: &str) -> Result<TileGrid, LevelError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(column, token)| {
                token.parse::<u32>().map_err(|_| LevelError::InvalidToken {
                    line: line_number,
                    column: column + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(LevelError::Ragged {
                    line: line_number,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LevelError::Empty);
    }
    Ok(TileGrid { rows })
}

/// Populate a fresh scene with bricks for every non-zero cell, followed by
/// one paddle and one ball.
pub fn build_level(grid: &TileGrid, surface: Surface, settings: &Settings) -> Scene {
    let mut scene = Scene::new();

    let level_width = surface.width;
    let level_height = surface.height / 2;
    let tile_size = level_width as f32 / grid.width() as f32;

    for (y, row) in grid.rows().iter().enumerate() {
        for (x, &code) in row.iter().enumerate() {
            let (kind, sprite) = match code {
                0 => continue,
                1 => (TileKind::Solid, Sprite::new(SOLID_COLOR, TEXTURE_SOLID)),
                _ => (TileKind::Breakable, Sprite::new(brick_color(code), TEXTURE_BRICK)),
            };

            let brick = scene.create_entity(BRICK_TAG);
            let transform = scene.get_mut::<Transform>(brick);
            transform.translation = Vec3::new(
                tile_size / 2.0 + tile_size * x as f32,
                tile_size / 2.0 + tile_size * y as f32,
                0.0,
            );
            transform.scale = Vec3::new(tile_size * 0.5, tile_size * 0.5, 1.0);
            scene.add(brick, Tile::new(kind));
            scene.add(brick, sprite);
        }
    }

    let start = paddle_start(surface);

    let player = scene.create_entity(PLAYER_TAG);
    let transform = scene.get_mut::<Transform>(player);
    transform.translation = start.extend(0.0);
    transform.scale = settings.paddle_size.extend(1.0);
    scene.add(player, Sprite::textured(TEXTURE_PADDLE));
    scene.add(player, Player::default());

    let ball = scene.create_entity(BALL_TAG);
    let transform = scene.get_mut::<Transform>(ball);
    transform.translation = start.extend(0.0);
    transform.scale = settings.ball_size.extend(1.0);
    scene.add(ball, Ball::new(settings.ball_velocity, settings.ball_radius));
    scene.add(ball, Sprite::textured(TEXTURE_BALL));

    log::debug!(
        "Built level {}x{} on {}x{} surface ({} entities)",
        grid.width(),
        grid.height(),
        level_width,
        level_height * 2,
        scene.len()
    );
    scene
}

/// Initial paddle (and ball) position: horizontally centred, at seven
/// eighths of the surface height
pub fn paddle_start(surface: Surface) -> Vec2 {
    let level_height = (surface.height / 2) as f32;
    Vec2::new((surface.width / 2) as f32, level_height * 1.75)
}

pub fn load_level(
    assets: &impl AssetSource,
    path: &str,
    surface: Surface,
    settings: &Settings,
) -> Result<Scene, LevelError> {
    let text = assets.read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_string(),
        source,
    })?;
    let grid = parse_grid(&text)?;
    Ok(build_level(&grid, surface, settings))
}

/// Load every level in `settings.level_paths`. Levels that fail to load are
/// logged and left out of the sequence.
pub fn load_levels(assets: &impl AssetSource, surface: Surface, settings: &Settings) -> Vec<Scene> {
    let mut levels = Vec::with_capacity(settings.level_paths.len());
    for path in &settings.level_paths {
        match load_level(assets, path, surface, settings) {
            Ok(scene) => levels.push(scene),
            Err(e) => log::warn!("Skipping level {path}: {e}"),
        }
    }
    log::info!("Loaded {} of {} levels", levels.len(), settings.level_paths.len());
    levels
}
