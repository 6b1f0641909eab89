//! Systems and world hooks used by the demos

use crate::components::{BasicComponent, Name, Position};
use ecsx::ecs::{Entities, System, World, WorldHooks};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;

/// Moves every positioned entity one step along X each tick
pub struct MoveX;

impl System for MoveX {
    fn tick(&mut self, entities: &mut Entities) {
        entities.each_with::<(Position,)>(|entity| {
            if let Some(position) = entity.get_mut::<Position>() {
                position.x += 1;
            }
        });
    }
}

/// Reports where every named, positioned entity is
#[derive(Default)]
pub struct NamedPositions {
    /// Every line reported so far
    pub reports: Vec<String>,
}

impl System for NamedPositions {
    fn tick(&mut self, entities: &mut Entities) {
        for entity in entities.each::<(Position, Name)>() {
            let (Some(position), Some(name)) =
                (entity.get::<Position>(), entity.get::<Name>())
            else {
                continue;
            };
            let line = format!("{} is at position {}, {}", name.name, position.x, position.y);
            info!("{line}");
            self.reports.push(line);
        }
    }
}

/// Adds the world's shared counter to every [`BasicComponent`] each tick
#[derive(Default)]
pub struct BasicSystem {
    /// Shared counter handed over by [`AppGlobals::configure_system`]
    pub app_variable: Option<Rc<Cell<i32>>>,
    /// Value of each component after every update
    pub history: Vec<i32>,
}

impl System for BasicSystem {
    fn tick(&mut self, entities: &mut Entities) {
        let Some(app_variable) = &self.app_variable else {
            return;
        };
        let amount = app_variable.get();
        let history = &mut self.history;

        entities.each_with::<(BasicComponent,)>(|entity| {
            if let Some(component) = entity.get_mut::<BasicComponent>() {
                component.variable += amount;
                info!("BasicComponent.variable is now {}", component.variable);
                history.push(component.variable);
            }
        });
    }
}

/// World-level globals for the `inheriting_world` demo
///
/// The counter goes up by one at the start of every tick and is shared with every
/// [`BasicSystem`] registered on the world.
#[derive(Default)]
pub struct AppGlobals {
    my_variable: Rc<Cell<i32>>,
}

impl AppGlobals {
    /// Current counter value
    pub fn my_variable(&self) -> i32 {
        self.my_variable.get()
    }
}

impl WorldHooks for AppGlobals {
    fn configure_system(&mut self, system: &mut dyn System) {
        if let Some(basic) = system.downcast_mut::<BasicSystem>() {
            basic.app_variable = Some(Rc::clone(&self.my_variable));
        }
    }

    fn on_tick(&mut self) {
        self.my_variable.set(self.my_variable.get() + 1);
    }
}

/// Spawn `count` unnamed entities at random positions. The same seed gives the same layout.
pub fn spawn_scattered<H: WorldHooks>(world: &mut World<H>, count: u32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let position = Position::new(rng.gen_range(-100..=100), rng.gen_range(-100..=100));
        world.create_entity().attach(position);
    }
}
