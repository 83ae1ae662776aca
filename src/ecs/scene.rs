//! Named collection of entities backed by a [`Registry`]
//!
//! Every entity created through a scene carries [`Identity`], [`Tag`] and
//! [`Transform`]. The UUID index gives O(1) lookup by stable identity; name
//! lookups scan the tag column.

use std::any::TypeId;
use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::components::{Ball, Identity, Player, Sprite, Tag, Text, Tile, Transform, Uuid};
use super::registry::{Component, Entity, Query, Registry, View};

#[derive(Debug, Clone)]
pub struct Scene {
    registry: Registry,
    entities: HashMap<Uuid, Entity>,
    /// Mints UUIDs for newly created entities
    rng: Pcg32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene with a randomly seeded UUID generator
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Empty scene whose generated UUIDs are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            registry: Registry::new(),
            entities: HashMap::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Deep copy of `other`: every entity is recreated with the same UUID and
    /// tag, then every other component kind is copied across by UUID. The
    /// source is left untouched. The copy's UUID generator is seeded from the
    /// source's, so copies of a seeded scene stay reproducible.
    pub fn copy(other: &Scene) -> Scene {
        let mut scene = Scene::with_seed(other.rng.clone().random());
        let src = &other.registry;

        let mut mapping = HashMap::with_capacity(other.entities.len());
        for source in src.view::<Identity>() {
            let uuid = src.get::<Identity>(source).uuid;
            let name = src.try_get::<Tag>(source).map_or("", |tag| tag.name.as_str());
            let target = scene.create_entity_with_uuid(uuid, name);
            mapping.insert(uuid, target);
        }

        copy_column::<Transform>(&mut scene.registry, src, &mapping);
        copy_column::<Sprite>(&mut scene.registry, src, &mapping);
        copy_column::<Tile>(&mut scene.registry, src, &mapping);
        copy_column::<Ball>(&mut scene.registry, src, &mapping);
        copy_column::<Player>(&mut scene.registry, src, &mapping);
        copy_column::<Text>(&mut scene.registry, src, &mapping);

        scene
    }

    pub fn create_entity(&mut self, name: &str) -> Entity {
        let uuid = self.next_uuid();
        self.create_entity_with_uuid(uuid, name)
    }

    /// Create an entity under a known UUID (used when copying scenes)
    pub fn create_entity_with_uuid(&mut self, uuid: Uuid, name: &str) -> Entity {
        let entity = self.registry.spawn();
        self.registry.insert(entity, Identity { uuid });
        self.registry.insert(entity, Transform::default());
        self.registry.insert(entity, Tag::new(name));
        self.entities.insert(uuid, entity);
        entity
    }

    /// Destroy an entity and drop it from the UUID index. Returns false if
    /// the handle was already dead.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if let Some(identity) = self.registry.try_get::<Identity>(entity) {
            let uuid = identity.uuid;
            if self.entities.get(&uuid) == Some(&entity) {
                self.entities.remove(&uuid);
            }
        }
        self.registry.despawn(entity)
    }

    /// Copy an entity inside this scene. The duplicate keeps its own fresh
    /// UUID; every other component present on the source is cloned.
    pub fn duplicate_entity(&mut self, entity: Entity) -> Entity {
        let name = self.name(entity).to_string();
        let duplicate = self.create_entity(&name);
        self.copy_if_exists::<Transform>(entity, duplicate);
        self.copy_if_exists::<Sprite>(entity, duplicate);
        self.copy_if_exists::<Tile>(entity, duplicate);
        self.copy_if_exists::<Ball>(entity, duplicate);
        self.copy_if_exists::<Player>(entity, duplicate);
        self.copy_if_exists::<Text>(entity, duplicate);
        duplicate
    }

    /// First entity whose tag equals `name`
    pub fn find_entity_by_name(&self, name: &str) -> Option<Entity> {
        self.registry
            .view::<Tag>()
            .find(|&entity| self.registry.get::<Tag>(entity).name == name)
    }

    pub fn entity_by_uuid(&self, uuid: Uuid) -> Option<Entity> {
        self.entities.get(&uuid).copied()
    }

    pub fn uuid(&self, entity: Entity) -> Uuid {
        self.registry.get::<Identity>(entity).uuid
    }

    pub fn name(&self, entity: Entity) -> &str {
        &self.registry.get::<Tag>(entity).name
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.registry.is_alive(entity)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.registry.entities()
    }

    /// Attach (or replace) a component
    ///
    /// # Panics
    /// If `T` is [`Identity`], which is assigned at creation only.
    pub fn add<T: Component>(&mut self, entity: Entity, component: T) -> &mut T {
        assert_not_identity::<T>();
        self.registry.insert(entity, component)
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.registry.has::<T>(entity)
    }

    /// # Panics
    /// If the entity is dead or lacks the component.
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.registry.get::<T>(entity)
    }

    /// # Panics
    /// If the entity is dead, lacks the component, or `T` is [`Identity`].
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        assert_not_identity::<T>();
        self.registry.get_mut::<T>(entity)
    }

    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.registry.try_get::<T>(entity)
    }

    /// # Panics
    /// If `T` is [`Identity`].
    pub fn try_get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        assert_not_identity::<T>();
        self.registry.try_get_mut::<T>(entity)
    }

    pub fn view<Q: Query>(&self) -> View<'_, Q> {
        self.registry.view::<Q>()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn next_uuid(&mut self) -> Uuid {
        loop {
            let uuid = Uuid(self.rng.random());
            if !self.entities.contains_key(&uuid) {
                return uuid;
            }
        }
    }

    fn copy_if_exists<T: Component>(&mut self, from: Entity, to: Entity) {
        if let Some(component) = self.registry.try_get::<T>(from).cloned() {
            self.registry.insert(to, component);
        }
    }
}

/// UUIDs are never reassigned; the index in [`Scene`] depends on it
fn assert_not_identity<T: Component>() {
    if TypeId::of::<T>() == TypeId::of::<Identity>() {
        panic!("{} is assigned at creation and cannot be replaced or mutated", T::NAME);
    }
}

fn copy_column<T: Component>(dst: &mut Registry, src: &Registry, mapping: &HashMap<Uuid, Entity>) {
    for source in src.view::<(Identity, T)>() {
        let uuid = src.get::<Identity>(source).uuid;
        let Some(&target) = mapping.get(&uuid) else {
            continue;
        };
        dst.insert(target, src.get::<T>(source).clone());
    }
}
