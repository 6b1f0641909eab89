//! # ECSX
//!
//! A minimal Entity-Component-System runtime.
//!
//! ## Features
//!
//! - **Heterogeneous component storage**: any `'static` type can be attached to an entity,
//!   at most one instance per concrete type
//! - **Typed queries**: filter live entities by a conjunction of component types
//! - **Ordered dispatch**: systems tick in registration order, one instance per type
//! - **World hooks**: inject world-scoped globals into systems at registration time
//!
//! ## Quick Start
//!
//! ```rust
//! use ecsx::prelude::*;
//!
//! struct Position { x: i32, y: i32 }
//! impl Component for Position {}
//!
//! struct MoveX;
//!
//! impl System for MoveX {
//!     fn tick(&mut self, entities: &mut Entities) {
//!         entities.each_with::<(Position,)>(|entity| {
//!             if let Some(position) = entity.get_mut::<Position>() {
//!                 position.x += 1;
//!             }
//!         });
//!     }
//! }
//!
//! let mut world = World::new();
//! let id = world.create_entity().id();
//! world.get_entity_mut(id).unwrap().attach(Position { x: 10, y: 10 });
//! world.register_system(MoveX);
//!
//! world.tick();
//! assert_eq!(world.get_entity(id).unwrap().get::<Position>().unwrap().x, 11);
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. Sharing a [`World`](ecs::World)
//! across threads is not supported.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;

pub use config::{Config, ConfigError, WorldConfig};

/// Common imports for ECSX users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WorldConfig},
        ecs::{Component, ComponentSet, Entities, Entity, EntityId, System, World, WorldHooks},
    };
}
