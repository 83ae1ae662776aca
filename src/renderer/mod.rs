//! Rendering seam
//!
//! The simulation never draws. Hosts implement [`Renderer`] over whatever
//! graphics API they have and consume the instance data extracted by
//! [`collect_sprites`] and [`collect_text`].

pub mod headless;
pub mod instance;

pub use headless::HeadlessRenderer;
pub use instance::{SpriteInstance, TextRun, collect_sprites, collect_text};

use crate::ecs::Scene;
use crate::platform::Surface;

pub trait Renderer {
    /// Register a texture and return the slot sprites refer to it by
    fn load_texture(&mut self, path: &str) -> u32;

    /// Queue every enabled sprite and label of `scene`. `clear` wipes the
    /// target first; overlays pass `false`.
    fn render(&mut self, scene: &Scene, clear: bool);

    /// Present everything queued since the last flush
    fn flush(&mut self);

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn surface(&self) -> Surface {
        Surface::new(self.width(), self.height())
    }
}
