//! Entity implementation

use super::{Component, ComponentSet};
use super::storage::ComponentStorage;
use log::debug;
use std::any::type_name;
use std::fmt;

/// Entity identifier
///
/// Issued by a [`World`](super::World) from a counter that starts at 0 and only moves
/// forward, so ids are never reused, even after the entity is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Monotonic id counter
#[derive(Debug, Default)]
pub(crate) struct EntityIdGenerator {
    next: u64,
}

impl EntityIdGenerator {
    /// Issue the next id
    pub(crate) fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return
    pub(crate) const fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}

/// An id plus the components attached to it
pub struct Entity {
    id: EntityId,
    components: ComponentStorage,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(super) fn new(id: EntityId) -> Self {
        Self {
            id,
            components: ComponentStorage::new(),
        }
    }

    /// Get the entity ID
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Attach `component` unless a `T` is already attached, and return the attached `T`.
    ///
    /// If the entity already has a `T`, the existing one is kept and `component` is dropped.
    pub fn attach<T: Component>(&mut self, component: T) -> &mut T {
        self.attach_with(move || component)
    }

    /// Like [`attach`](Self::attach), but only builds the component when no `T` is attached.
    pub fn attach_with<T: Component>(&mut self, make: impl FnOnce() -> T) -> &mut T {
        if self.components.contains::<T>() {
            debug!(
                "Entity {} already has a {}; keeping the existing one",
                self.id,
                type_name::<T>()
            );
        }
        self.components.get_or_insert_with(make)
    }

    /// Whether every component type in `Q` is attached, e.g. `entity.has::<(Position, Name)>()`
    pub fn has<Q: ComponentSet>(&self) -> bool {
        Q::is_present_in(&self.components)
    }

    /// Whether a single component type is attached
    pub fn contains<T: Component>(&self) -> bool {
        self.components.contains::<T>()
    }

    /// Get the attached `T`, or `None`
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    /// Get the attached `T` mutably, or `None`
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Type names of the attached components
    pub fn component_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.type_names()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &self.components.type_names().collect::<Vec<_>>())
            .finish()
    }
}
