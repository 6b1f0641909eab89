//! Live entity registry and component queries
//!
//! Queries are plain linear scans: every call walks all live entities and checks each
//! one's components. There is no index from component type to entities.
//!
//! The query methods take `&mut self`, so while a query result or visitor is alive the
//! registry cannot be changed. Creating or destroying entities from inside a visitor is not
//! supported, and the borrow checker rejects it.

use super::{ComponentSet, Entity, EntityId};
use std::collections::HashMap;

/// The set of live entities, keyed by id
///
/// Iteration order is whatever the underlying map yields; it is stable between calls as long
/// as no entity is created or destroyed.
#[derive(Debug, Default)]
pub struct Entities {
    entities: HashMap<EntityId, Entity>,
}

impl Entities {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, entity: Entity) -> &mut Entity {
        self.entities.entry(entity.id()).or_insert(entity)
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Look up an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity for mutation
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Whether `id` refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Read-only iteration over every live entity
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Every entity that has all the components in `Q`, collected at call time.
    ///
    /// ```rust
    /// # use ecsx::prelude::*;
    /// # struct Position { x: i32 }
    /// # impl Component for Position {}
    /// # struct Name(String);
    /// # impl Component for Name {}
    /// # let mut entities = Entities::new();
    /// for entity in entities.each::<(Position, Name)>() {
    ///     if let Some(position) = entity.get_mut::<Position>() {
    ///         position.x += 1;
    ///     }
    /// }
    /// ```
    pub fn each<Q: ComponentSet>(&mut self) -> Vec<&mut Entity> {
        self.entities
            .values_mut()
            .filter(|entity| entity.has::<Q>())
            .collect()
    }

    /// Call `visit` on every entity that has all the components in `Q`, in registry order
    pub fn each_with<Q: ComponentSet>(&mut self, mut visit: impl FnMut(&mut Entity)) {
        for entity in self.entities.values_mut() {
            if entity.has::<Q>() {
                visit(entity);
            }
        }
    }

    /// Every live entity, collected at call time
    pub fn all(&mut self) -> Vec<&mut Entity> {
        self.entities.values_mut().collect()
    }

    /// Call `visit` on every live entity, in registry order
    pub fn all_with(&mut self, mut visit: impl FnMut(&mut Entity)) {
        for entity in self.entities.values_mut() {
            visit(entity);
        }
    }

    /// How many entities have all the components in `Q`
    pub fn count<Q: ComponentSet>(&self) -> usize {
        self.entities.values().filter(|entity| entity.has::<Q>()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Component;
    use std::collections::HashSet;

    struct Position(i32);
    impl Component for Position {}

    struct Name(&'static str);
    impl Component for Name {}

    fn registry() -> Entities {
        let mut entities = Entities::new();
        for raw in 0..4 {
            let entity = entities.insert(Entity::new(EntityId::from_raw(raw)));
            if raw % 2 == 0 {
                entity.attach(Position(0));
            }
            if raw < 2 {
                entity.attach(Name("named"));
            }
        }
        entities
    }

    fn ids(entities: Vec<&mut Entity>) -> HashSet<u64> {
        entities.into_iter().map(|entity| entity.id().raw()).collect()
    }

    #[test]
    fn test_each_filters_by_conjunction() {
        let mut entities = registry();

        assert_eq!(ids(entities.each::<(Position,)>()), HashSet::from([0, 2]));
        assert_eq!(ids(entities.each::<(Name,)>()), HashSet::from([0, 1]));
        assert_eq!(ids(entities.each::<(Position, Name)>()), HashSet::from([0]));
    }

    #[test]
    fn test_each_is_repeatable() {
        let mut entities = registry();
        let first = ids(entities.each::<(Position,)>());
        let second = ids(entities.each::<(Position,)>());
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_with_visits_the_same_entities_as_each() {
        let mut entities = registry();
        let mut visited = HashSet::new();
        entities.each_with::<(Name,)>(|entity| {
            visited.insert(entity.id().raw());
        });
        assert_eq!(visited, ids(entities.each::<(Name,)>()));
    }

    #[test]
    fn test_each_with_mutates_in_place() {
        let mut entities = registry();
        entities.each_with::<(Position,)>(|entity| {
            if let Some(position) = entity.get_mut::<Position>() {
                position.0 += 5;
            }
        });

        let total: i32 = entities
            .iter()
            .filter_map(|entity| entity.get::<Position>())
            .map(|position| position.0)
            .sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_all_and_empty_set_match_everything() {
        let mut entities = registry();
        assert_eq!(entities.all().len(), 4);
        assert_eq!(entities.each::<()>().len(), 4);

        let mut visits = 0;
        entities.all_with(|_| visits += 1);
        assert_eq!(visits, 4);
    }

    #[test]
    fn test_empty_registry_queries() {
        let mut entities = Entities::new();
        assert!(entities.each::<(Position,)>().is_empty());
        assert!(entities.all().is_empty());
        assert_eq!(entities.count::<(Position,)>(), 0);
    }

    #[test]
    fn test_count_and_lookup() {
        let mut entities = registry();
        assert_eq!(entities.count::<(Position, Name)>(), 1);
        assert!(entities.contains(EntityId::from_raw(3)));
        assert!(entities.remove(EntityId::from_raw(3)).is_some());
        assert!(entities.get(EntityId::from_raw(3)).is_none());
        assert_eq!(entities.len(), 3);
    }
}
