//! System trait and the ordered system registry

use super::Entities;
use log::trace;
use std::any::{type_name, Any, TypeId};

/// Access to a value as `dyn Any`; implemented for every `'static` type
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`
    fn as_any(&self) -> &dyn Any;
    /// Borrow as `&mut dyn Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit of per-tick logic
///
/// A system sees the world's live entities only through the registry passed to
/// [`tick`](System::tick); it never owns them.
pub trait System: AsAny {
    /// Run one update
    fn tick(&mut self, entities: &mut Entities);

    /// Name used in log output
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<'a> dyn System + 'a {
    /// Whether this system's concrete type is `S`
    pub fn is<S: System>(&self) -> bool {
        self.as_any().is::<S>()
    }

    /// Downcast to a concrete system type
    pub fn downcast_ref<S: System>(&self) -> Option<&S> {
        self.as_any().downcast_ref::<S>()
    }

    /// Downcast to a concrete system type for mutation
    pub fn downcast_mut<S: System>(&mut self) -> Option<&mut S> {
        self.as_any_mut().downcast_mut::<S>()
    }
}

struct SystemEntry {
    type_id: TypeId,
    system: Box<dyn System>,
}

impl SystemEntry {
    fn is<S: System>(&self) -> bool {
        self.type_id == TypeId::of::<S>()
    }
}

/// Registered systems in registration order, at most one per concrete type
#[derive(Default)]
pub struct SystemRegistry {
    systems: Vec<SystemEntry>,
}

impl SystemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            systems: Vec::with_capacity(capacity),
        }
    }

    /// Index of the registered `S`, found by scanning in registration order
    pub fn position<S: System>(&self) -> Option<usize> {
        self.systems.iter().position(SystemEntry::is::<S>)
    }

    /// Whether an `S` is registered
    pub fn contains<S: System>(&self) -> bool {
        self.position::<S>().is_some()
    }

    /// The registered `S`, if any
    pub fn get<S: System>(&self) -> Option<&S> {
        self.systems
            .iter()
            .find(|entry| entry.is::<S>())
            .and_then(|entry| entry.system.downcast_ref::<S>())
    }

    /// The registered `S` for mutation, if any
    pub fn get_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems
            .iter_mut()
            .find(|entry| entry.is::<S>())
            .and_then(|entry| entry.system.downcast_mut::<S>())
    }

    /// Append a system and return its index. Callers check for duplicates first.
    pub(crate) fn push<S: System>(&mut self, system: S) -> usize {
        self.systems.push(SystemEntry {
            type_id: TypeId::of::<S>(),
            system: Box::new(system),
        });
        self.systems.len() - 1
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut dyn System {
        self.systems[index].system.as_mut()
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Names of the registered systems, in dispatch order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.iter().map(|entry| entry.system.name())
    }

    /// Tick every system once, in registration order
    pub fn tick_all(&mut self, entities: &mut Entities) {
        for entry in &mut self.systems {
            trace!("Ticking system {}", entry.system.name());
            entry.system.tick(entities);
        }
    }
}
