//! Inheriting world demo
//!
//! Shows how world hooks pass world-level globals to systems: the world keeps a counter that
//! goes up every tick, and `BasicSystem` adds that counter to a component each tick.
//!
//! Usage: `inheriting_world [config.toml|config.ron]`

use ecsx::ecs::World;
use ecsx_demos::components::BasicComponent;
use ecsx_demos::systems::{AppGlobals, BasicSystem};
use ecsx_demos::{init_logging, load_config_from_args, DemoError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_from_args()?;
    init_logging(&config);

    log::info!("Starting inheriting world demo ({} ticks)", config.ticks);

    let mut world = World::with_hooks_and_config(AppGlobals::default(), config.world.clone());
    world.create_entity().attach(BasicComponent::default());
    world.register_system(BasicSystem::default());

    for _ in 0..config.ticks {
        world.tick();
    }

    let system = world
        .system::<BasicSystem>()
        .ok_or(DemoError::MissingSystem("BasicSystem"))?;
    for value in &system.history {
        println!("BasicComponent.variable is now {value}");
    }

    log::info!("World counter ended at {}", world.hooks().my_variable());
    Ok(())
}
