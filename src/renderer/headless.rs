//! Renderer that draws nothing and keeps counts
//!
//! Used by the native binary and tests in place of a GPU backend.

use super::{Renderer, SpriteInstance, TextRun, collect_sprites, collect_text};
use crate::ecs::Scene;

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    textures: Vec<String>,
    sprites: Vec<SpriteInstance>,
    text: Vec<TextRun>,
    clears: u32,
    frames: u64,
    /// Sprites and labels submitted in the last flushed frame
    last_frame: (usize, usize),
}

impl HeadlessRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Texture paths in slot order
    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    /// Sprite instances queued since the last flush
    pub fn pending_sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    pub fn pending_text(&self) -> &[TextRun] {
        &self.text
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// `(sprites, labels)` presented by the last flush
    pub fn last_frame(&self) -> (usize, usize) {
        self.last_frame
    }

    /// Clears requested in the frame being built
    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl Renderer for HeadlessRenderer {
    fn load_texture(&mut self, path: &str) -> u32 {
        if let Some(slot) = self.textures.iter().position(|loaded| loaded == path) {
            return slot as u32;
        }
        self.textures.push(path.to_string());
        log::debug!("Texture slot {} -> {path}", self.textures.len() - 1);
        (self.textures.len() - 1) as u32
    }

    fn render(&mut self, scene: &Scene, clear: bool) {
        if clear {
            self.sprites.clear();
            self.text.clear();
            self.clears += 1;
        }
        self.sprites.extend(collect_sprites(scene));
        self.text.extend(collect_text(scene));
    }

    fn flush(&mut self) {
        self.last_frame = (self.sprites.len(), self.text.len());
        self.sprites.clear();
        self.text.clear();
        self.clears = 0;
        self.frames += 1;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
