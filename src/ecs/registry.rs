//! Dense entity registry with one column per component kind
//!
//! Entities are slot indices plus a generation counter. Each component kind
//! owns a `Vec<Option<T>>` column indexed by slot, so lookups are a bounds
//! check and a branch. Freed slots are recycled with a bumped generation,
//! which keeps stale handles from aliasing new entities.

use std::marker::PhantomData;

use super::components::{Ball, Identity, Player, Sprite, Tag, Text, Tile, Transform};

/// Handle to an entity inside one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Slot index (stable while the entity is alive)
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A component kind stored in the registry. Every kind is also a
/// single-column [`Query`].
pub trait Component: Query + Clone + 'static {
    /// Type name used in panic messages
    const NAME: &'static str;

    #[doc(hidden)]
    fn column(registry: &Registry) -> &[Option<Self>];
    #[doc(hidden)]
    fn column_mut(registry: &mut Registry) -> &mut Vec<Option<Self>>;
}

/// A filter over component presence: one component kind or a tuple of them
pub trait Query {
    fn matches(registry: &Registry, index: usize) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
    identities: Vec<Option<Identity>>,
    tags: Vec<Option<Tag>>,
    transforms: Vec<Option<Transform>>,
    sprites: Vec<Option<Sprite>>,
    tiles: Vec<Option<Tile>>,
    balls: Vec<Option<Ball>>,
    players: Vec<Option<Player>>,
    texts: Vec<Option<Text>>,
}

macro_rules! component_columns {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                const NAME: &'static str = stringify!($ty);

                fn column(registry: &Registry) -> &[Option<Self>] {
                    &registry.$field
                }

                fn column_mut(registry: &mut Registry) -> &mut Vec<Option<Self>> {
                    &mut registry.$field
                }
            }

            impl Query for $ty {
                fn matches(registry: &Registry, index: usize) -> bool {
                    registry.$field[index].is_some()
                }
            }
        )*

        impl Registry {
            fn push_slot(&mut self) {
                $(self.$field.push(None);)*
            }

            fn clear_slot(&mut self, index: usize) {
                $(self.$field[index] = None;)*
            }
        }
    };
}

component_columns! {
    Identity => identities,
    Tag => tags,
    Transform => transforms,
    Sprite => sprites,
    Tile => tiles,
    Ball => balls,
    Player => players,
    Text => texts,
}

macro_rules! tuple_query {
    ($($name:ident),+) => {
        impl<$($name: Query),+> Query for ($($name,)+) {
            fn matches(registry: &Registry, index: usize) -> bool {
                $($name::matches(registry, index))&&+
            }
        }
    };
}

tuple_query!(A);
tuple_query!(A, B);
tuple_query!(A, B, C);
tuple_query!(A, B, C, D);

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an entity with no components
    pub fn spawn(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            let slot = index as usize;
            self.alive[slot] = true;
            return Entity {
                index,
                generation: self.generations[slot],
            };
        }

        let index = self.generations.len() as u32;
        self.generations.push(0);
        self.alive.push(true);
        self.push_slot();
        Entity {
            index,
            generation: 0,
        }
    }

    /// Remove an entity and all of its components. Returns false for a
    /// handle that was already destroyed.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let slot = entity.index as usize;
        self.clear_slot(slot);
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let slot = entity.index as usize;
        slot < self.alive.len() && self.alive[slot] && self.generations[slot] == entity.generation
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.alive.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live entities in slot order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(slot, _)| self.handle(slot))
    }

    /// Attach a component, replacing any previous value of the same kind
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> &mut T {
        let slot = self.live_slot::<T>(entity);
        T::column_mut(self)[slot].insert(component)
    }

    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.is_alive(entity) {
            return None;
        }
        T::column_mut(self)[entity.index as usize].take()
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.try_get::<T>(entity).is_some()
    }

    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        T::column(self)[entity.index as usize].as_ref()
    }

    pub fn try_get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        T::column_mut(self)[entity.index as usize].as_mut()
    }

    /// Read a component the entity is known to have.
    ///
    /// # Panics
    /// If the entity is dead or lacks the component.
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        let slot = self.live_slot::<T>(entity);
        match T::column(self)[slot].as_ref() {
            Some(component) => component,
            None => panic!("entity {entity} has no {} component", T::NAME),
        }
    }

    /// Mutable counterpart of [`Registry::get`]
    ///
    /// # Panics
    /// If the entity is dead or lacks the component.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        let slot = self.live_slot::<T>(entity);
        match T::column_mut(self)[slot].as_mut() {
            Some(component) => component,
            None => panic!("entity {entity} has no {} component", T::NAME),
        }
    }

    /// Lazy sequence of live entities matching `Q`, in slot order
    pub fn view<Q: Query>(&self) -> View<'_, Q> {
        View {
            registry: self,
            cursor: 0,
            _query: PhantomData,
        }
    }

    fn handle(&self, slot: usize) -> Entity {
        Entity {
            index: slot as u32,
            generation: self.generations[slot],
        }
    }

    fn live_slot<T: Component>(&self, entity: Entity) -> usize {
        if !self.is_alive(entity) {
            panic!("access to {} on dead entity {entity}", T::NAME);
        }
        entity.index as usize
    }
}

/// Iterator returned by [`Registry::view`]. Cloning it, or calling
/// [`View::restart`], replays the query from the first slot.
pub struct View<'a, Q> {
    registry: &'a Registry,
    cursor: usize,
    _query: PhantomData<fn() -> Q>,
}

impl<Q> Clone for View<'_, Q> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry,
            cursor: self.cursor,
            _query: PhantomData,
        }
    }
}

impl<Q> View<'_, Q> {
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl<Q: Query> Iterator for View<'_, Q> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        while self.cursor < self.registry.alive.len() {
            let slot = self.cursor;
            self.cursor += 1;
            if self.registry.alive[slot] && Q::matches(self.registry, slot) {
                return Some(self.registry.handle(slot));
            }
        }
        None
    }
}
