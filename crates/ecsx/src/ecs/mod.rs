//! Entity-Component-System implementation
//!
//! Entities own their components directly; queries scan the live entity set; systems run in
//! registration order.

pub mod world;
pub mod entity;
pub mod component;
pub mod system;
pub mod query;
pub mod storage;

#[cfg(test)]
mod tests;

pub use world::{World, WorldHooks};
pub use entity::{Entity, EntityId};
pub use component::{Component, ComponentSet};
pub use system::{AsAny, System, SystemRegistry};
pub use query::Entities;
pub use storage::ComponentStorage;
