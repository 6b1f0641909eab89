//! Names and positions demo
//!
//! Creates one named entity at (10, 10), then ticks a world with two systems: one moves
//! every positioned entity along X, the other reports where each named entity is.
//!
//! Usage: `names_and_positions [config.toml|config.ron]`

use ecsx::ecs::World;
use ecsx_demos::components::{Name, Position};
use ecsx_demos::systems::{spawn_scattered, MoveX, NamedPositions};
use ecsx_demos::{init_logging, load_config_from_args, DemoError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_from_args()?;
    init_logging(&config);

    log::info!("Starting names and positions demo ({} ticks)", config.ticks);

    let mut world = World::with_config(config.world.clone());

    let entity = world.create_entity();
    entity.attach(Position::new(10, 10));
    entity.attach(Name::new("MyEntity!"));

    spawn_scattered(&mut world, config.extra_entities, config.seed);

    world.register_system(MoveX);
    world.register_system(NamedPositions::default());

    for _ in 0..config.ticks {
        world.tick();
    }

    let reporter = world
        .system::<NamedPositions>()
        .ok_or(DemoError::MissingSystem("NamedPositions"))?;
    for line in &reporter.reports {
        println!("{line}");
    }

    log::info!(
        "Finished after {} ticks with {} entities",
        world.tick_count(),
        world.entity_count()
    );
    Ok(())
}
