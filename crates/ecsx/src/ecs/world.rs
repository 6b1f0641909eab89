//! ECS World implementation

use super::entity::EntityIdGenerator;
use super::system::SystemRegistry;
use super::{Entities, Entity, EntityId, System};
use crate::config::WorldConfig;
use log::{debug, info, trace, warn};
use std::any::type_name;

/// Customization points for a [`World`]
///
/// Both methods do nothing by default. A world built with [`World::with_hooks`] calls them:
///
/// - [`configure_system`](WorldHooks::configure_system) once per newly registered system,
///   right after registration and before its first tick. Downcast the system to hand it
///   world-scoped globals.
/// - [`on_tick`](WorldHooks::on_tick) at the start of every [`World::tick`], before any
///   system runs.
///
/// ```rust
/// use ecsx::prelude::*;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct Counter { ticks: Option<Rc<Cell<u32>>> }
///
/// impl System for Counter {
///     fn tick(&mut self, _entities: &mut Entities) {}
/// }
///
/// struct Globals { ticks: Rc<Cell<u32>> }
///
/// impl WorldHooks for Globals {
///     fn configure_system(&mut self, system: &mut dyn System) {
///         if let Some(counter) = system.downcast_mut::<Counter>() {
///             counter.ticks = Some(Rc::clone(&self.ticks));
///         }
///     }
///
///     fn on_tick(&mut self) {
///         self.ticks.set(self.ticks.get() + 1);
///     }
/// }
///
/// let mut world = World::with_hooks(Globals { ticks: Rc::new(Cell::new(0)) });
/// world.register_system(Counter::default());
/// world.tick();
/// assert_eq!(world.hooks().ticks.get(), 1);
/// ```
pub trait WorldHooks {
    /// Called once for each newly registered system
    fn configure_system(&mut self, _system: &mut dyn System) {}

    /// Called at the start of every tick
    fn on_tick(&mut self) {}
}

/// No hooks
impl WorldHooks for () {}

/// ECS World containing all entities and systems
///
/// Entities are created and destroyed through the world; their ids come from a counter that
/// starts at 0 and is never reset. Systems run in registration order on every
/// [`tick`](World::tick).
///
/// A world is meant for a single thread. Nothing here blocks or yields.
pub struct World<H: WorldHooks = ()> {
    config: WorldConfig,
    ids: EntityIdGenerator,
    entities: Entities,
    systems: SystemRegistry,
    hooks: H,
    tick_count: u64,
}

impl World {
    /// Create a new world with default configuration and no hooks
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create a world with no hooks from `config`
    pub fn with_config(config: WorldConfig) -> Self {
        Self::with_hooks_and_config((), config)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: WorldHooks> World<H> {
    /// Create a world that calls `hooks`
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_hooks_and_config(hooks, WorldConfig::default())
    }

    /// Create a world that calls `hooks`, sized by `config`
    pub fn with_hooks_and_config(hooks: H, config: WorldConfig) -> Self {
        debug!(
            "Creating world '{}' (entity capacity {}, system capacity {})",
            config.name, config.entity_capacity, config.system_capacity
        );
        Self {
            ids: EntityIdGenerator::default(),
            entities: Entities::with_capacity(config.entity_capacity),
            systems: SystemRegistry::with_capacity(config.system_capacity),
            hooks,
            tick_count: 0,
            config,
        }
    }

    /// Create a new entity with the next free id
    pub fn create_entity(&mut self) -> &mut Entity {
        let id = self.ids.next_id();
        debug!("World '{}': created entity {}", self.config.name, id);
        self.entities.insert(Entity::new(id))
    }

    /// Remove an entity and all its components. Returns whether it existed.
    ///
    /// The id is not reused afterwards.
    pub fn destroy_entity(&mut self, id: EntityId) -> bool {
        let removed = self.entities.remove(id).is_some();
        if removed {
            debug!("World '{}': destroyed entity {}", self.config.name, id);
        }
        removed
    }

    /// Look up an entity; `None` if it was destroyed or never created
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity for mutation
    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The id the next [`create_entity`](Self::create_entity) will assign
    pub const fn next_entity_id(&self) -> EntityId {
        self.ids.peek()
    }

    /// The live entity registry
    pub const fn entities(&self) -> &Entities {
        &self.entities
    }

    /// The live entity registry, for running queries outside of a tick
    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    /// Register `system`, or return the already registered system of the same type.
    ///
    /// When an `S` is already registered, `system` is dropped and the existing instance is
    /// returned unchanged. Otherwise `system` is appended to the dispatch order and
    /// [`WorldHooks::configure_system`] runs on it before this returns.
    pub fn register_system<S: System>(&mut self, system: S) -> &mut S {
        self.register_system_with(move || system)
    }

    /// Like [`register_system`](Self::register_system), but only builds the system when no
    /// `S` is registered yet.
    pub fn register_system_with<S: System>(&mut self, make: impl FnOnce() -> S) -> &mut S {
        let index = if let Some(index) = self.systems.position::<S>() {
            warn!(
                "World '{}': system {} is already registered; the new instance is ignored",
                self.config.name,
                type_name::<S>()
            );
            index
        } else {
            let index = self.systems.push(make());
            self.hooks.configure_system(self.systems.at_mut(index));
            info!(
                "World '{}': registered system {} (#{})",
                self.config.name,
                type_name::<S>(),
                index
            );
            index
        };

        self.systems
            .at_mut(index)
            .downcast_mut::<S>()
            .expect("system registry tag always matches its boxed system")
    }

    /// The registered system of type `S`, if any
    pub fn system<S: System>(&self) -> Option<&S> {
        self.systems.get::<S>()
    }

    /// The registered system of type `S` for mutation, if any
    pub fn system_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems.get_mut::<S>()
    }

    /// Whether a system of type `S` is registered
    pub fn contains_system<S: System>(&self) -> bool {
        self.systems.contains::<S>()
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Names of the registered systems, in dispatch order
    pub fn system_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.names()
    }

    /// Run [`WorldHooks::on_tick`], then tick every system once in registration order
    pub fn tick(&mut self) {
        self.hooks.on_tick();

        trace!(
            "World '{}': tick {} ({} systems, {} entities)",
            self.config.name,
            self.tick_count,
            self.systems.len(),
            self.entities.len()
        );
        self.systems.tick_all(&mut self.entities);

        self.tick_count += 1;
    }

    /// Number of completed ticks
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The hooks this world calls
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The hooks this world calls, for mutation
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// The configuration this world was built with
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }
}
