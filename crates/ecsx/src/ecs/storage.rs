//! Per-entity component storage
//!
//! Each entity owns one [`ComponentStorage`]: a flat list of boxed components, each tagged
//! with the `TypeId` of its concrete type. Lookups are linear scans comparing that tag,
//! and at most one entry exists per type.

use super::Component;
use std::any::{type_name, Any, TypeId};

/// One attached component plus its runtime type tag
struct ComponentEntry {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl ComponentEntry {
    fn new<T: Component>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    fn is<T: Component>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    fn downcast_ref<T: Component>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.value.downcast_ref::<T>()
        } else {
            None
        }
    }

    fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            self.value.downcast_mut::<T>()
        } else {
            None
        }
    }
}

/// Heterogeneous, exclusively owned collection of components
#[derive(Default)]
pub struct ComponentStorage {
    entries: Vec<ComponentEntry>,
}

impl ComponentStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a component of type `T` is stored
    pub fn contains<T: Component>(&self) -> bool {
        self.entries.iter().any(ComponentEntry::is::<T>)
    }

    /// The stored `T`, if any
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.entries.iter().find_map(ComponentEntry::downcast_ref::<T>)
    }

    /// The stored `T` for mutation, if any
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.entries.iter_mut().find_map(ComponentEntry::downcast_mut::<T>)
    }

    /// Return the stored `T`, building and storing one with `make` first if there is none.
    ///
    /// `make` is not called when a `T` is already present; the existing value is left as is.
    pub fn get_or_insert_with<T: Component>(&mut self, make: impl FnOnce() -> T) -> &mut T {
        let index = match self.entries.iter().position(ComponentEntry::is::<T>) {
            Some(index) => index,
            None => {
                self.entries.push(ComponentEntry::new(make()));
                self.entries.len() - 1
            }
        };

        self.entries[index]
            .downcast_mut::<T>()
            .expect("component entry tag always matches its boxed value")
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names of the stored components, in attach order
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Position {
        x: i32,
        y: i32,
    }
    impl Component for Position {}

    #[derive(Debug, PartialEq)]
    struct Name(String);
    impl Component for Name {}

    #[test]
    fn test_empty_storage() {
        let storage = ComponentStorage::new();
        assert!(storage.is_empty());
        assert!(!storage.contains::<Position>());
        assert!(storage.get::<Position>().is_none());
    }

    #[test]
    fn test_insert_then_get() {
        let mut storage = ComponentStorage::new();
        storage.get_or_insert_with(|| Position { x: 1, y: 2 });

        assert!(storage.contains::<Position>());
        assert!(!storage.contains::<Name>());
        assert_eq!(storage.get::<Position>(), Some(&Position { x: 1, y: 2 }));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_second_insert_keeps_first_value() {
        let mut storage = ComponentStorage::new();
        storage.get_or_insert_with(|| Position { x: 1, y: 1 });

        let mut called = false;
        let existing = storage.get_or_insert_with(|| {
            called = true;
            Position { x: 9, y: 9 }
        });

        assert_eq!(*existing, Position { x: 1, y: 1 });
        assert!(!called);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut storage = ComponentStorage::new();
        storage.get_or_insert_with(|| Name("a".to_string()));

        storage.get_mut::<Name>().unwrap().0.push('b');

        assert_eq!(storage.get::<Name>(), Some(&Name("ab".to_string())));
    }

    #[test]
    fn test_type_names_in_attach_order() {
        let mut storage = ComponentStorage::new();
        storage.get_or_insert_with(|| Name(String::new()));
        storage.get_or_insert_with(|| Position { x: 0, y: 0 });

        let names: Vec<_> = storage.type_names().collect();
        assert!(names[0].ends_with("Name"));
        assert!(names[1].ends_with("Position"));
    }
}
