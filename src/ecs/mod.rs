//! Entity-component store
//!
//! A closed set of component kinds stored in dense per-kind columns, plus
//! [`Scene`], which adds stable UUIDs, names and whole-scene duplication on
//! top of the raw [`Registry`].

pub mod components;
pub mod registry;
pub mod scene;

pub use components::{Ball, Identity, Player, Sprite, Tag, Text, Tile, TileKind, Transform, Uuid};
pub use registry::{Component, Entity, Query, Registry, View};
pub use scene::Scene;
