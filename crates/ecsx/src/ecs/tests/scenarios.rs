//! End-to-end scenarios mirroring the demo programs

use crate::ecs::{Component, Entities, System, World, WorldHooks};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}
impl Component for Position {}

#[derive(Debug, Clone, PartialEq)]
struct Name(String);
impl Component for Name {}

/// Moves every positioned entity one step along X
struct MoveX;

impl System for MoveX {
    fn tick(&mut self, entities: &mut Entities) {
        entities.each_with::<(Position,)>(|entity| {
            if let Some(position) = entity.get_mut::<Position>() {
                position.x += 1;
            }
        });
    }
}

/// Records "name at x,y" lines instead of printing them
#[derive(Default)]
struct NamedPositions {
    lines: Vec<String>,
}

impl System for NamedPositions {
    fn tick(&mut self, entities: &mut Entities) {
        for entity in entities.each::<(Position, Name)>() {
            if let (Some(position), Some(name)) =
                (entity.get::<Position>(), entity.get::<Name>())
            {
                self.lines
                    .push(format!("{} is at position {}, {}", name.0, position.x, position.y));
            }
        }
    }
}

#[test]
fn test_position_moves_once_per_tick() {
    let mut world = World::new();
    let entity = world.create_entity();
    entity.attach(Position { x: 10, y: 10 });
    entity.attach(Name("X".to_string()));
    let id = entity.id();

    world.register_system(MoveX);
    for _ in 0..3 {
        world.tick();
    }

    let position = world.get_entity(id).and_then(|e| e.get::<Position>()).cloned();
    assert_eq!(position, Some(Position { x: 13, y: 10 }));
}

#[test]
fn test_reporter_sees_moved_positions() {
    let mut world = World::new();
    let entity = world.create_entity();
    entity.attach(Position { x: 10, y: 10 });
    entity.attach(Name("MyEntity!".to_string()));
    // Unnamed entities are skipped by the reporter
    world.create_entity().attach(Position { x: 0, y: 0 });

    world.register_system(MoveX);
    world.register_system(NamedPositions::default());
    world.tick();
    world.tick();
    world.tick();

    let lines = &world.system::<NamedPositions>().unwrap().lines;
    assert_eq!(
        lines,
        &vec![
            "MyEntity! is at position 11, 10".to_string(),
            "MyEntity! is at position 12, 10".to_string(),
            "MyEntity! is at position 13, 10".to_string(),
        ]
    );
}

#[derive(Debug)]
struct Counter(i32);
impl Component for Counter {}

/// Adds the world-wide counter to every `Counter` component
#[derive(Default)]
struct AddGlobal {
    global: Option<Rc<Cell<i32>>>,
    seen: Vec<i32>,
}

impl System for AddGlobal {
    fn tick(&mut self, entities: &mut Entities) {
        let Some(global) = &self.global else {
            return;
        };
        let amount = global.get();
        entities.each_with::<(Counter,)>(|entity| {
            if let Some(counter) = entity.get_mut::<Counter>() {
                counter.0 += amount;
                self.seen.push(counter.0);
            }
        });
    }
}

struct GlobalCounter {
    value: Rc<Cell<i32>>,
    configured: Rc<RefCell<Vec<&'static str>>>,
}

impl WorldHooks for GlobalCounter {
    fn configure_system(&mut self, system: &mut dyn System) {
        self.configured.borrow_mut().push(system.name());
        if let Some(add) = system.downcast_mut::<AddGlobal>() {
            add.global = Some(Rc::clone(&self.value));
        }
    }

    fn on_tick(&mut self) {
        self.value.set(self.value.get() + 1);
    }
}

#[test]
fn test_hooks_inject_globals_and_run_before_systems() {
    let configured = Rc::new(RefCell::new(Vec::new()));
    let mut world = World::with_hooks(GlobalCounter {
        value: Rc::new(Cell::new(0)),
        configured: Rc::clone(&configured),
    });
    let id = world.create_entity().id();
    world.get_entity_mut(id).unwrap().attach(Counter(0));
    world.register_system(AddGlobal::default());

    for _ in 0..5 {
        world.tick();
    }

    // on_tick bumps the global to 1, 2, 3, 4, 5 before the system reads it
    assert_eq!(world.system::<AddGlobal>().unwrap().seen, vec![1, 3, 6, 10, 15]);
    assert_eq!(world.get_entity(id).unwrap().get::<Counter>().unwrap().0, 15);
    assert_eq!(world.hooks().value.get(), 5);
}

#[test]
fn test_configure_system_runs_once_per_type() {
    let configured = Rc::new(RefCell::new(Vec::new()));
    let mut world = World::with_hooks(GlobalCounter {
        value: Rc::new(Cell::new(0)),
        configured: Rc::clone(&configured),
    });

    world.register_system(AddGlobal::default());
    world.register_system(MoveX);
    world.register_system(AddGlobal::default());

    let names = configured.borrow();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("AddGlobal"));
    assert!(names[1].ends_with("MoveX"));
}

#[test]
fn test_destroyed_entity_is_skipped_by_systems() {
    let mut world = World::new();
    let kept = world.create_entity();
    kept.attach(Position { x: 0, y: 0 });
    let kept = kept.id();
    let dropped = world.create_entity();
    dropped.attach(Position { x: 0, y: 0 });
    let dropped = dropped.id();

    world.register_system(MoveX);
    world.destroy_entity(dropped);
    world.tick();

    assert!(world.get_entity(dropped).is_none());
    assert_eq!(world.get_entity(kept).unwrap().get::<Position>().unwrap().x, 1);
}
